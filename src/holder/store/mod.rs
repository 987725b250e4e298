/* src/holder/store/mod.rs */

mod load;
mod read;
mod reload;

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};
#[cfg(feature = "signal")]
use std::sync::{Arc, atomic::AtomicBool};

use arc_swap::ArcSwap;

#[cfg(feature = "events")]
use super::Change;
use crate::parser::Sections;

/// Default event channel capacity.
#[cfg(feature = "events")]
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Thread-safe configuration store.
///
/// The whole section → key → value mapping sits behind a single atomically
/// swapped pointer. Readers load the current generation without blocking and
/// never see a half-applied reload. Writers serialize through one mutex,
/// which also guards the list of source files, and publish a freshly built
/// mapping with a single swap.
///
/// Share it as `Arc<Store>`; background reloading needs the `Arc`.
pub struct Store {
	pub(crate) inner: ArcSwap<Sections>,
	pub(crate) sources: Mutex<Vec<PathBuf>>,
	/// Run flag of the active polling task, if any.
	#[cfg(feature = "signal")]
	pub(crate) watch: Mutex<Option<Arc<AtomicBool>>>,
	#[cfg(feature = "events")]
	pub(crate) events: tokio::sync::broadcast::Sender<Change>,
}

impl Store {
	/// Creates a new empty store.
	pub fn new() -> Self {
		Self {
			inner: ArcSwap::from_pointee(Sections::new()),
			sources: Mutex::new(Vec::new()),
			#[cfg(feature = "signal")]
			watch: Mutex::new(None),
			#[cfg(feature = "events")]
			events: tokio::sync::broadcast::channel(DEFAULT_EVENT_CAPACITY).0,
		}
	}

	/// Creates a new empty store with custom event channel capacity.
	///
	/// Note: Events may be dropped if subscribers process slower than
	/// the reload rate and the channel fills up.
	#[cfg(feature = "events")]
	pub fn with_event_capacity(capacity: usize) -> Self {
		Self {
			events: tokio::sync::broadcast::channel(capacity).0,
			..Self::new()
		}
	}

	// Poisoning only means a writer panicked before swapping; the published
	// mapping is still a complete generation.
	pub(crate) fn lock_sources(&self) -> MutexGuard<'_, Vec<PathBuf>> {
		self.sources.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl Default for Store {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Store {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut s = f.debug_struct("Store");
		s.field("sections", &self.inner.load().len());
		s.field("sources", &*self.lock_sources());
		#[cfg(feature = "signal")]
		s.field("watching", &self.is_auto_reloading());
		s.finish_non_exhaustive()
	}
}
