/* src/holder/store/read.rs */

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "events")]
use super::super::Change;
use super::super::{Config, ConfigError, Result};
use super::Store;
use crate::parser::Sections;

impl Store {
	/// Returns a detached copy of one section.
	pub fn get(&self, section: &str) -> Result<Config> {
		let snapshot = self.inner.load();
		snapshot
			.get(section)
			.map(|entries| Config::new(section, entries.clone()))
			.ok_or_else(|| ConfigError::SectionNotFound {
				section: section.to_string(),
			})
	}

	/// Like [`get`](Store::get), for sections that must exist.
	///
	/// # Panics
	///
	/// Panics if the section is not present.
	pub fn must_get(&self, section: &str) -> Config {
		match self.get(section) {
			Ok(config) => config,
			Err(e) => panic!("{e}"),
		}
	}

	/// Returns a single raw value without copying the whole section.
	pub fn get_value(&self, section: &str, key: &str) -> Option<String> {
		let snapshot = self.inner.load();
		snapshot.get(section)?.get(key).cloned()
	}

	/// Returns the names of all known sections.
	pub fn sections(&self) -> HashSet<String> {
		let snapshot = self.inner.load();
		snapshot.keys().cloned().collect()
	}

	/// Returns true if the section exists.
	pub fn contains_section(&self, section: &str) -> bool {
		self.inner.load().contains_key(section)
	}

	/// Returns an atomic snapshot of the whole mapping.
	pub fn snapshot(&self) -> Arc<Sections> {
		self.inner.load_full()
	}

	/// Returns the source files recorded by the last successful initialization.
	pub fn sources(&self) -> Vec<PathBuf> {
		self.lock_sources().clone()
	}

	/// Returns the number of sections.
	pub fn len(&self) -> usize {
		self.inner.load().len()
	}

	/// Returns true if the store has no sections.
	pub fn is_empty(&self) -> bool {
		self.inner.load().is_empty()
	}

	/// Subscribes to change events produced by reload passes.
	#[cfg(feature = "events")]
	pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Change> {
		self.events.subscribe()
	}
}
