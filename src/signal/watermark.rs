/* src/signal/watermark.rs */

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What a single stat tells us about a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Observation {
	/// First time this path was seen; only the baseline is recorded.
	Baseline,
	Unchanged,
	/// Strictly newer than the watermark. The watermark has been advanced.
	Modified,
}

/// Last observed modification time per source file.
#[derive(Debug, Default)]
pub(crate) struct Watermarks {
	seen: HashMap<PathBuf, SystemTime>,
}

impl Watermarks {
	pub(crate) fn observe(&mut self, path: &Path, modified: SystemTime) -> Observation {
		match self.seen.get_mut(path) {
			None => {
				self.seen.insert(path.to_path_buf(), modified);
				Observation::Baseline
			}
			Some(last) if modified > *last => {
				*last = modified;
				Observation::Modified
			}
			Some(_) => Observation::Unchanged,
		}
	}
}
