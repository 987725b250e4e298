/* src/parser/line.rs */

/// Marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Classification of a single line of configuration text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
	/// Nothing but whitespace (after the comment is stripped).
	Blank,
	/// A `[name]` header. The name is kept verbatim, inner whitespace included.
	Section(&'a str),
	/// A `key = value` pair, both sides trimmed.
	Entry { key: &'a str, value: &'a str },
	/// Anything else. Carries the trimmed, comment-stripped text.
	Malformed(&'a str),
}

impl<'a> Line<'a> {
	/// Classifies one line of text.
	pub fn parse(raw: &'a str) -> Self {
		let content = match raw.find(COMMENT_MARKER) {
			Some(idx) => &raw[..idx],
			None => raw,
		};
		let trimmed = content.trim();

		if trimmed.is_empty() {
			return Line::Blank;
		}

		if let Some(name) = section_name(trimmed) {
			return Line::Section(name);
		}

		if is_entry(trimmed)
			&& let Some((key, value)) = trimmed.split_once('=')
		{
			return Line::Entry {
				key: key.trim(),
				value: value.trim(),
			};
		}

		Line::Malformed(trimmed)
	}
}

// `^\[.+\]$`
fn section_name(line: &str) -> Option<&str> {
	line.strip_prefix('[')?
		.strip_suffix(']')
		.filter(|inner| !inner.is_empty())
}

// `.+=.+`: some `=` with at least one character on each side.
fn is_entry(line: &str) -> bool {
	line
		.char_indices()
		.any(|(idx, c)| c == '=' && idx > 0 && idx + 1 < line.len())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blank_and_comment_lines() {
		assert_eq!(Line::parse(""), Line::Blank);
		assert_eq!(Line::parse("   \t "), Line::Blank);
		assert_eq!(Line::parse("# just a comment"), Line::Blank);
		assert_eq!(Line::parse("   # indented comment"), Line::Blank);
	}

	#[test]
	fn test_section_header() {
		assert_eq!(Line::parse("[server]"), Line::Section("server"));
		assert_eq!(Line::parse("  [server]  # trailing"), Line::Section("server"));
		// Inner whitespace is preserved.
		assert_eq!(Line::parse("[ spaced name ]"), Line::Section(" spaced name "));
		// Empty brackets are not a header.
		assert_eq!(Line::parse("[]"), Line::Malformed("[]"));
		assert_eq!(Line::parse("[open"), Line::Malformed("[open"));
	}

	#[test]
	fn test_entry_splits_on_first_equals() {
		assert_eq!(
			Line::parse("name = ljd"),
			Line::Entry {
				key: "name",
				value: "ljd"
			}
		);
		assert_eq!(
			Line::parse("  url=http://host/?a=1&b=2  "),
			Line::Entry {
				key: "url",
				value: "http://host/?a=1&b=2"
			}
		);
		assert_eq!(
			Line::parse("padding = =="),
			Line::Entry {
				key: "padding",
				value: "=="
			}
		);
	}

	#[test]
	fn test_entry_comment_is_stripped() {
		assert_eq!(
			Line::parse("port = 8080 # default"),
			Line::Entry {
				key: "port",
				value: "8080"
			}
		);
	}

	#[test]
	fn test_malformed_lines() {
		assert_eq!(Line::parse("just words"), Line::Malformed("just words"));
		assert_eq!(Line::parse("key ="), Line::Malformed("key ="));
		assert_eq!(Line::parse("= value"), Line::Malformed("= value"));
		assert_eq!(Line::parse("="), Line::Malformed("="));
	}
}
