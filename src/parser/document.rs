/* src/parser/document.rs */

use std::collections::HashMap;

use super::{Line, SectionMap, Sections};

/// The parsed contents of a single configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
	sections: Sections,
}

impl Document {
	/// Parses configuration text.
	///
	/// Lines may be separated by any mix of `\r` and `\n`. Malformed lines are
	/// reported through `tracing` and dropped; entries that appear before any
	/// section header are ignored.
	pub fn parse(content: &str) -> Self {
		let mut sections: Sections = HashMap::new();
		let mut current: Option<&str> = None;

		// Line numbers follow `\n`; a lone `\r` splits within the same number.
		let lines = content
			.split('\n')
			.enumerate()
			.flat_map(|(idx, line)| line.split('\r').map(move |part| (idx, part)))
			.filter(|(_, line)| !line.is_empty());

		for (idx, raw) in lines {
			match Line::parse(raw) {
				Line::Blank => {}
				Line::Section(name) => {
					sections.entry(name.to_string()).or_default();
					current = Some(name);
				}
				Line::Entry { key, value } => {
					if let Some(section) = current.and_then(|name| sections.get_mut(name)) {
						section.insert(key.to_string(), value.to_string());
					}
				}
				Line::Malformed(text) => {
					tracing::warn!(line = idx + 1, text, "Malformed config line dropped");
				}
			}
		}

		Self { sections }
	}

	/// Returns the entries of one section.
	pub fn section(&self, name: &str) -> Option<&SectionMap> {
		self.sections.get(name)
	}

	/// Returns the names of all sections in this document.
	pub fn section_names(&self) -> impl Iterator<Item = &str> {
		self.sections.keys().map(String::as_str)
	}

	/// Returns true if the document has no sections.
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Merges this document on top of `target`. Entries from `self` win.
	pub fn merge_into(self, target: &mut Sections) {
		for (name, entries) in self.sections {
			target.entry(name).or_default().extend(entries);
		}
	}

	/// Consumes the document, returning its sections.
	pub fn into_sections(self) -> Sections {
		self.sections
	}
}
