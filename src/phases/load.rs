//! Phase 1: Loading Note Records
//!
//! Decodes every `*.yaml` file of the content collection into a [`Note`].
//!
//! ## Process
//!
//! 1.  **Select Records**: Only files ending in `.yaml` are considered; any
//!     other file is skipped.
//!
//! 2.  **Decode**: Each record is decoded on its own. The first failure aborts
//!     the load with an error naming the file; no partial result is returned.
//!
//! 3.  **Default**: A note without a theme gets [`DEFAULT_THEME`].
//!
//! No structural validation happens here; see [`crate::validate`].
//!
//! [`DEFAULT_THEME`]: crate::note::DEFAULT_THEME

use log::{debug, info};

use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;
use crate::note::{is_record, Note};

/// Execute Phase 1: decode all note records in `content`.
///
/// The returned notes follow the collection's path order, which callers must
/// not rely on; Phase 2 establishes the real order.
pub fn execute(content: &MemoryFS) -> Result<Vec<Note>> {
    let mut notes = Vec::new();
    for (path, file) in content.files() {
        if !is_record(path) {
            debug!("Skipping non-record file {}", path.display());
            continue;
        }

        let mut note = Note::from_yaml(&file.content).map_err(|e| Error::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        note.apply_defaults();

        debug!("Loaded note '{}' from {}", note.slug, path.display());
        notes.push(note);
    }

    info!("Loaded {} notes", notes.len());
    Ok(notes)
}
