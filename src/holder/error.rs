/* src/holder/error.rs */

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

/// Errors raised by the store and by typed accessors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The requested section does not exist in the store.
	#[error("section {section} not found")]
	SectionNotFound { section: String },

	/// The requested key does not exist in the section.
	#[error("key {key} not found in section {section}")]
	KeyNotFound { section: String, key: String },

	/// The value could not be parsed as an integer.
	#[error("ParseInt: [{section}] {key} = {value:?}: {source}")]
	ParseInt {
		section: String,
		key: String,
		value: String,
		#[source]
		source: ParseIntError,
	},

	/// The value could not be parsed as a float.
	#[error("ParseFloat: [{section}] {key} = {value:?}: {source}")]
	ParseFloat {
		section: String,
		key: String,
		value: String,
		#[source]
		source: ParseFloatError,
	},

	/// The value could not be parsed into the requested type.
	#[error("Parse: [{section}] {key} = {value:?}: {reason}")]
	Parse {
		section: String,
		key: String,
		value: String,
		reason: String,
	},

	/// An existing source could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// `reinitialize` was called before any source paths were recorded.
	#[error("store not initialized: no source files recorded")]
	NotInitialized,
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, ConfigError>;
