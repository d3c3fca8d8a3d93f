//! Note records
//!
//! A note is one YAML document describing a single published page:
//!
//! ```yaml
//! slug: ownership-is-a-budget
//! title: Ownership is a budget
//! thesis: Every owner is a line item someone has to pay for.
//! bullets:
//!   - Shared ownership hides the cost until it is due.
//! tags: [rust, design]
//! links:
//!   - label: The Book
//!     url: https://doc.rust-lang.org/book/
//! theme: dusk
//! ```
//!
//! Decoding is deliberately lenient: every field falls back to its empty
//! value so the generator can render incomplete records. Structural checks
//! live in [`crate::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Theme assigned to notes that do not name one.
pub const DEFAULT_THEME: &str = "default";

/// File extension of note records.
pub const NOTE_EXTENSION: &str = "yaml";

/// Whether `path` names a note record: its file name ends in `.yaml`.
///
/// The check is on raw bytes, so file names that are not valid UTF-8 still
/// qualify.
pub fn is_record(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        name.as_encoded_bytes()
            .strip_suffix(NOTE_EXTENSION.as_bytes())
            .is_some_and(|stem| stem.ends_with(b"."))
    })
}

/// A labelled outbound link owned by a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A single note, as decoded from its record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub slug: String,
    pub title: String,
    pub thesis: String,
    pub quote: Option<String>,
    pub bullets: Vec<String>,
    pub example: Option<String>,
    pub diagram: Option<String>,
    pub links: Vec<Link>,
    pub tags: Vec<String>,
    pub theme: String,
}

impl Note {
    /// Decode a note from raw YAML bytes without applying defaults.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self> {
        Ok(serde_yaml::from_slice(bytes)?)
    }

    /// Fill in values the record may leave out.
    pub fn apply_defaults(&mut self) {
        if self.theme.is_empty() {
            self.theme = DEFAULT_THEME.to_string();
        }
    }
}
