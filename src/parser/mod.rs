/* src/parser/mod.rs */

//!
//! Line-oriented parser for the INI-style configuration format.
//!
//! ```text
//! # comment
//! [section]
//! key = value   # trailing comment
//! ```

mod document;
mod line;

pub use document::Document;
pub use line::{COMMENT_MARKER, Line};

use std::collections::HashMap;

/// Key → value entries of one section.
pub type SectionMap = HashMap<String, String>;

/// Section name → entries.
pub type Sections = HashMap<String, SectionMap>;
