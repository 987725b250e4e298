/* src/holder/config.rs */

use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::parser::SectionMap;

/// An owned copy of one section's entries.
///
/// Detached from the [`Store`](super::Store): later reloads do not affect it,
/// and changing it does not affect the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
	name: String,
	entries: SectionMap,
}

impl Config {
	/// Creates a section copy from its name and entries.
	pub fn new(name: impl Into<String>, entries: SectionMap) -> Self {
		Self {
			name: name.into(),
			entries,
		}
	}

	/// Name of the section this copy was taken from.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the raw string value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Returns true if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Inserts or overwrites an entry in this copy only.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(key.into(), value.into())
	}

	/// Iterates over `(key, value)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the section has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Consumes the copy, returning the raw entries.
	pub fn into_inner(self) -> SectionMap {
		self.entries
	}

	/// Parses the value of `key` as a signed 64-bit integer.
	pub fn get_int(&self, key: &str) -> Result<i64> {
		let value = self.require(key)?;
		value.parse().map_err(|source| ConfigError::ParseInt {
			section: self.name.clone(),
			key: key.to_string(),
			value: value.to_string(),
			source,
		})
	}

	/// Parses the value of `key` as an `i32`. Out-of-range values are errors.
	pub fn get_i32(&self, key: &str) -> Result<i32> {
		let value = self.require(key)?;
		value.parse().map_err(|source| ConfigError::ParseInt {
			section: self.name.clone(),
			key: key.to_string(),
			value: value.to_string(),
			source,
		})
	}

	/// Parses the value of `key` as a 64-bit float.
	pub fn get_float(&self, key: &str) -> Result<f64> {
		let value = self.require(key)?;
		value.parse().map_err(|source| ConfigError::ParseFloat {
			section: self.name.clone(),
			key: key.to_string(),
			value: value.to_string(),
			source,
		})
	}

	/// Parses the value of `key` with the target type's [`FromStr`].
	pub fn get_parsed<T>(&self, key: &str) -> Result<T>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let value = self.require(key)?;
		value.parse().map_err(|e: T::Err| ConfigError::Parse {
			section: self.name.clone(),
			key: key.to_string(),
			value: value.to_string(),
			reason: e.to_string(),
		})
	}

	fn require(&self, key: &str) -> Result<&str> {
		self.get(key).ok_or_else(|| ConfigError::KeyNotFound {
			section: self.name.clone(),
			key: key.to_string(),
		})
	}
}

impl Index<&str> for Config {
	type Output = str;

	/// Panics if `key` is absent, like [`HashMap`](std::collections::HashMap) indexing.
	fn index(&self, key: &str) -> &str {
		match self.get(key) {
			Some(value) => value,
			None => panic!("key {key} not found in section {}", self.name),
		}
	}
}

impl<'a> IntoIterator for &'a Config {
	type Item = (&'a String, &'a String);
	type IntoIter = std::collections::hash_map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
