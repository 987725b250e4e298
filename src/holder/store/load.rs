/* src/holder/store/load.rs */

use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "logging")]
use log::{debug, info};

use super::super::{ConfigError, Result};
use super::Store;
use crate::parser::{Document, Sections};

impl Store {
	/// Creates a store and loads it from `paths`.
	pub fn open<I, P>(paths: I) -> Result<Self>
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		let store = Self::new();
		store.initialize(paths)?;
		Ok(store)
	}

	/// Loads and merges `paths` in order, replacing the whole store.
	///
	/// Later files override earlier ones for the same section and key.
	/// Missing files are skipped. If an existing file cannot be read, the
	/// error is returned and neither the contents nor the recorded source
	/// list change; a caller should not continue on a store it expected to
	/// be loaded.
	pub fn initialize<I, P>(&self, paths: I) -> Result<()>
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();

		let mut sources = self.lock_sources();
		let sections = load_sources(&paths)?;

		#[cfg(feature = "logging")]
		info!(
			"Loaded {} config sections from {} source(s)",
			sections.len(),
			paths.len()
		);

		self.inner.store(Arc::new(sections));
		*sources = paths;
		Ok(())
	}

	/// Re-runs [`initialize`](Store::initialize) with the recorded sources.
	pub fn reinitialize(&self) -> Result<()> {
		let sources = self.lock_sources();
		if sources.is_empty() {
			return Err(ConfigError::NotInitialized);
		}

		let sections = load_sources(&sources)?;
		self.inner.store(Arc::new(sections));
		Ok(())
	}

	/// Parses `reader` and merges it on top of the current contents.
	///
	/// The recorded sources are untouched, so a later reload from files
	/// drops whatever was merged here.
	pub fn merge_reader<R: Read>(&self, mut reader: R) -> Result<()> {
		let mut bytes = Vec::new();
		reader
			.read_to_end(&mut bytes)
			.map_err(|source| ConfigError::Io {
				path: PathBuf::from("<reader>"),
				source,
			})?;
		let document = Document::parse(&String::from_utf8_lossy(&bytes));

		let _sources = self.lock_sources();
		let mut sections = Sections::clone(&self.inner.load());
		document.merge_into(&mut sections);
		self.inner.store(Arc::new(sections));
		Ok(())
	}
}

/// Reads and merges every existing file in `paths`, in order.
pub(crate) fn load_sources(paths: &[PathBuf]) -> Result<Sections> {
	let mut sections = Sections::new();
	for path in paths {
		if let Some(document) = read_document(path)? {
			document.merge_into(&mut sections);
		}
	}
	Ok(sections)
}

fn read_document(path: &Path) -> Result<Option<Document>> {
	// Invalid UTF-8 is replaced, not rejected.
	match std::fs::read(path) {
		Ok(bytes) => Ok(Some(Document::parse(&String::from_utf8_lossy(&bytes)))),
		Err(e) if e.kind() == ErrorKind::NotFound => {
			#[cfg(feature = "logging")]
			debug!("Skipping missing config file {:?}", path);
			Ok(None)
		}
		Err(source) => Err(ConfigError::Io {
			path: path.to_path_buf(),
			source,
		}),
	}
}
