/* src/holder/event.rs */

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A key whose value changed during a reload pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Change {
	pub section: String,
	pub key: String,
	/// The value after the reload.
	pub value: String,
}
