//! Phase 2: Ordering Notes
//!
//! Sorts the loaded notes by slug so every build of the same content produces
//! the same index order, the same sitemap order, and the same diffs.
//!
//! ## Process
//!
//! 1.  **Sort**: Ascending byte-wise comparison of `slug`.
//!
//! 2.  **Uniqueness**: After sorting, equal slugs are adjacent. Two notes with
//!     the same slug would write the same pages, so the build stops with
//!     [`Error::DuplicateSlug`] instead of letting one silently replace the
//!     other.

use crate::error::{Error, Result};
use crate::note::Note;

/// Execute Phase 2: sort notes by slug and reject duplicates.
pub fn execute(mut notes: Vec<Note>) -> Result<Vec<Note>> {
    notes.sort_by(|a, b| a.slug.as_bytes().cmp(b.slug.as_bytes()));

    if let Some(pair) = notes.windows(2).find(|pair| pair[0].slug == pair[1].slug) {
        return Err(Error::DuplicateSlug {
            slug: pair[0].slug.clone(),
        });
    }

    Ok(notes)
}
