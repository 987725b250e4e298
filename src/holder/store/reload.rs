/* src/holder/store/reload.rs */

use std::sync::Arc;

use super::super::{Change, ConfigError, Result};
use super::Store;
use super::load::load_sources;
use crate::parser::Sections;

impl Store {
	/// Runs one reload pass: rebuilds the store from the recorded sources and
	/// returns the keys whose values changed.
	///
	/// Only sections that existed before the pass are compared. Keys that were
	/// added to such a section count as changed; new sections and removed
	/// keys are not reported.
	///
	/// On error the store keeps its previous contents.
	pub fn reload(&self) -> Result<Vec<Change>> {
		let sources = self.lock_sources();
		if sources.is_empty() {
			return Err(ConfigError::NotInitialized);
		}

		let before = self.inner.load_full();
		let after = Arc::new(load_sources(&sources)?);
		self.inner.store(Arc::clone(&after));
		drop(sources);

		let changes = diff(&before, &after);

		#[cfg(feature = "events")]
		for change in &changes {
			let _ = self.events.send(change.clone());
		}

		Ok(changes)
	}
}

pub(crate) fn diff(before: &Sections, after: &Sections) -> Vec<Change> {
	let mut changes = Vec::new();
	for (section, entries) in after {
		let Some(old_entries) = before.get(section) else {
			continue;
		};
		for (key, value) in entries {
			if old_entries.get(key) != Some(value) {
				changes.push(Change {
					section: section.clone(),
					key: key.clone(),
					value: value.clone(),
				});
			}
		}
	}
	changes
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parser::Document;

	fn sections(text: &str) -> Sections {
		Document::parse(text).into_sections()
	}

	#[test]
	fn test_diff_reports_changed_values() {
		let before = sections("[s]\nname = a\nage = 1\n");
		let after = sections("[s]\nname = b\nage = 1\n");

		let changes = diff(&before, &after);
		assert_eq!(
			changes,
			vec![Change {
				section: "s".to_string(),
				key: "name".to_string(),
				value: "b".to_string(),
			}]
		);
	}

	#[test]
	fn test_diff_reports_added_keys_in_known_sections() {
		let before = sections("[s]\nname = a\n");
		let after = sections("[s]\nname = a\nextra = 1\n");

		let changes = diff(&before, &after);
		assert_eq!(changes.len(), 1);
		assert_eq!(changes[0].key, "extra");
	}

	#[test]
	fn test_diff_ignores_new_sections_and_removals() {
		let before = sections("[s]\nname = a\ngone = 1\n[old]\nk = v\n");
		let after = sections("[s]\nname = a\n[fresh]\nk = v\n");

		assert!(diff(&before, &after).is_empty());
	}

	#[test]
	fn test_diff_is_idempotent() {
		let state = sections("[s]\nname = a\n[t]\nx = 1\n");
		assert!(diff(&state, &state).is_empty());
	}
}
