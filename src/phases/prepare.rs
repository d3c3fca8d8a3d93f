//! Phase 3: Preparing the Output Directory
//!
//! Every build starts from an empty output directory. Whatever a previous
//! build left behind is removed first, so stale pages of deleted notes never
//! survive a rebuild.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Execute Phase 3: remove whatever is at `output_path` and recreate it as
/// an empty directory.
///
/// A directory is removed recursively; a file or symlink is unlinked. A
/// missing location is not an error. Any other removal or creation failure
/// is.
pub fn execute(output_path: &Path) -> Result<()> {
    match fs::symlink_metadata(output_path) {
        Ok(metadata) => {
            let removed = if metadata.is_dir() {
                fs::remove_dir_all(output_path)
            } else {
                fs::remove_file(output_path)
            };
            removed.map_err(|e| Error::Filesystem {
                message: format!(
                    "Failed to remove output location '{}': {}",
                    output_path.display(),
                    e
                ),
            })?;
            debug!("Removed previous output at {}", output_path.display());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(Error::Filesystem {
                message: format!(
                    "Failed to inspect output location '{}': {}",
                    output_path.display(),
                    e
                ),
            })
        }
    }

    fs::create_dir_all(output_path).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to create output directory '{}': {}",
            output_path.display(),
            e
        ),
    })
}
