/* src/signal/worker.rs */

use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::MissedTickBehavior;

use super::WatchConfig;
use super::watermark::{Observation, Watermarks};
use crate::holder::Store;

pub(crate) async fn poll_sources<F>(
	store: Weak<Store>,
	running: Arc<AtomicBool>,
	config: WatchConfig,
	mut on_change: F,
) where
	F: FnMut(&str, &str, &str) + Send + 'static,
{
	let mut watermarks = Watermarks::default();
	// Set from the first newer mtime until a reload pass succeeds.
	let mut pending = false;
	let mut interval = tokio::time::interval(config.interval);
	interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

	tracing::debug!(interval = ?config.interval, "Auto reload started");

	loop {
		interval.tick().await;
		if !running.load(Ordering::Acquire) {
			break;
		}
		let Some(store) = store.upgrade() else {
			tracing::debug!("Store dropped");
			break;
		};

		pending |= scan_sources(&store, &mut watermarks).await;
		if !pending {
			continue;
		}

		// Parsing does blocking file I/O; callbacks run back on this task.
		match tokio::task::spawn_blocking(move || store.reload()).await {
			Ok(Ok(changes)) => {
				pending = false;
				tracing::debug!(changes = changes.len(), "Config reloaded");
				for change in &changes {
					on_change(&change.section, &change.key, &change.value);
				}
			}
			Ok(Err(e)) => tracing::error!("Config reload failed, keeping previous config: {}", e),
			Err(e) => tracing::error!("Config reload task failed: {}", e),
		}
	}

	tracing::debug!("Auto reload stopped");
}

/// Stats every source once. Returns true if any of them moved forward.
async fn scan_sources(store: &Store, watermarks: &mut Watermarks) -> bool {
	let mut modified = false;

	for path in store.sources() {
		let mtime = match tokio::fs::metadata(&path).await.and_then(|m| m.modified()) {
			Ok(mtime) => mtime,
			Err(e) => {
				tracing::trace!(path = %path.display(), "Skipping unreadable source: {}", e);
				continue;
			}
		};

		if watermarks.observe(&path, mtime) == Observation::Modified {
			tracing::debug!(path = %path.display(), "Source modified");
			modified = true;
		}
	}

	modified
}
