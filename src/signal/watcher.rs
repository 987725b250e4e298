/* src/signal/watcher.rs */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, MutexGuard, PoisonError};

use super::worker::poll_sources;
use super::{Result, WatchConfig, WatchError};
use crate::holder::Store;

impl Store {
	/// Starts polling the recorded source files with the default interval.
	///
	/// `callback` receives `(section, key, new_value)` for every key that
	/// changed within a section that already existed before the reload. It
	/// runs on the polling task, so a slow callback delays the next poll.
	///
	/// A reload pass that fails is logged and retried on every following
	/// poll until it succeeds. The task only holds a weak reference, so it
	/// also exits once the last `Arc<Store>` is dropped.
	///
	/// Must be called from within a tokio runtime. Fails if auto reload is
	/// already running on this store.
	pub fn start_auto_reload<F>(self: &Arc<Self>, callback: F) -> Result<()>
	where
		F: FnMut(&str, &str, &str) + Send + 'static,
	{
		self.start_auto_reload_with(WatchConfig::default(), callback)
	}

	/// Like [`start_auto_reload`](Store::start_auto_reload) with a custom config.
	pub fn start_auto_reload_with<F>(self: &Arc<Self>, config: WatchConfig, callback: F) -> Result<()>
	where
		F: FnMut(&str, &str, &str) + Send + 'static,
	{
		if config.interval.is_zero() {
			return Err(WatchError::Config("poll interval must be non-zero".to_string()));
		}
		let runtime = tokio::runtime::Handle::try_current().map_err(|_| WatchError::NoRuntime)?;

		let mut slot = self.lock_watch();
		if slot.is_some() {
			return Err(WatchError::AlreadyWatching);
		}

		let running = Arc::new(AtomicBool::new(true));
		runtime.spawn(poll_sources(
			Arc::downgrade(self),
			Arc::clone(&running),
			config,
			callback,
		));
		*slot = Some(running);
		Ok(())
	}

	/// Asks the polling task to stop. Returns false if it was not running.
	///
	/// The task notices at its next tick; a reload pass already in progress
	/// runs to completion. Auto reload may be started again right away.
	pub fn stop_auto_reload(&self) -> bool {
		match self.lock_watch().take() {
			Some(running) => {
				running.store(false, Ordering::Release);
				true
			}
			None => false,
		}
	}

	/// Returns true while auto reload is started and not yet stopped.
	pub fn is_auto_reloading(&self) -> bool {
		self.lock_watch().is_some()
	}

	fn lock_watch(&self) -> MutexGuard<'_, Option<Arc<AtomicBool>>> {
		self.watch.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
