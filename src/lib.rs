/* src/lib.rs */

//!
//! An INI-style configuration store with live reloading.
//!
//! This crate integrates three components:
//!
//! - **parser**: Line-oriented parsing of `[section]` / `key = value` files.
//! - **holder**: Thread-safe store with atomic whole-store replacement and
//!   typed accessors on detached section copies.
//! - **signal**: Background polling of source files with per-key change
//!   callbacks.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features below except `serde` (default).
//! - `signal`: Enables auto reload (requires tokio).
//! - `events`: Broadcasts every reported change on a channel.
//! - `stream`: Exposes change events as a `Stream`.
//! - `logging`: Store lifecycle messages through `log`.
//! - `serde`: Serialize/Deserialize for public data types.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use hotini::holder::Store;
//!
//! # fn main() -> Result<(), hotini::holder::ConfigError> {
//! let store = Store::open(["app.cfg", "app.local.cfg"])?;
//! let server = store.get("server")?;
//! let port = server.get_int("port")?;
//! # let _ = port;
//! # Ok(())
//! # }
//! ```

pub mod holder;
pub mod parser;

#[cfg(feature = "signal")]
pub mod signal;

pub use holder::{Change, Config, ConfigError, Store};
