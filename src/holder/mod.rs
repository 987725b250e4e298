/* src/holder/mod.rs */

mod config;
mod error;
mod event;
mod store;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use event::Change;
pub use store::Store;
#[cfg(feature = "events")]
pub use store::DEFAULT_EVENT_CAPACITY;
