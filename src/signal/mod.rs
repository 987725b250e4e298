/* src/signal/mod.rs */

//!
//! Polling-based live reloading for a [`Store`](crate::holder::Store).
//!
//! A single background task stats every recorded source file once per
//! interval. When any file's modification time moves past its watermark the
//! task runs a reload pass and hands each changed key to the callback.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod watcher;
mod watermark;
mod worker;

#[cfg(feature = "stream")]
mod stream;

#[cfg(feature = "stream")]
pub use stream::ChangeStream;

/// Default time between two polls of the source files.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Custom error type for the signal module.
#[derive(thiserror::Error, Debug)]
pub enum WatchError {
	#[error("auto reload is already running")]
	AlreadyWatching,

	#[error("auto reload requires a running tokio runtime")]
	NoRuntime,

	#[error("Invalid configuration: {0}")]
	Config(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, WatchError>;

/// Configuration for the reload loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
	/// Time between two polls. Must be non-zero.
	pub interval: Duration,
}

impl Default for WatchConfig {
	fn default() -> Self {
		Self {
			interval: DEFAULT_POLL_INTERVAL,
		}
	}
}

impl WatchConfig {
	/// Set the poll interval.
	#[must_use]
	pub fn with_interval(mut self, interval: Duration) -> Self {
		self.interval = interval;
		self
	}
}
