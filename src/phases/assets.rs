//! Phase 5: Copying Static Assets
//!
//! Copies the static asset collection into the output root byte for byte,
//! keeping each file name. Only top-level files are copied; entries nested
//! below a directory are left out.

use std::fs;
use std::path::{Component, Path};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;

/// Execute Phase 5: copy every top-level asset into `output_path`.
///
/// Returns the number of files copied.
pub fn execute(assets: &MemoryFS, output_path: &Path) -> Result<usize> {
    let mut copied = 0;

    for (relative_path, file) in assets.files() {
        let mut components = relative_path.components();
        let name = match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => name,
            _ => {
                debug!("Skipping nested asset {}", relative_path.display());
                continue;
            }
        };

        let target = output_path.join(name);
        fs::write(&target, &file.content).map_err(|e| Error::Filesystem {
            message: format!("Failed to copy asset '{}': {}", target.display(), e),
        })?;
        copied += 1;
    }

    info!("Copied {} static files", copied);
    Ok(copied)
}
