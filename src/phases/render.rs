//! Phase 4: Rendering Pages
//!
//! Writes the index page and two copies of every note page into the output
//! directory.
//!
//! ## Process
//!
//! 1.  **Index**: `index.html` at the output root lists every note in order.
//!
//! 2.  **Note Pages**: Each note is rendered once and the same bytes are
//!     written to `{slug}.html` and `{slug}/index.html`, so both `/slug` and
//!     `/slug/` resolve to the page without a server-side redirect.
//!
//! A rendering or write failure stops the build at the offending note.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::note::Note;
use crate::templates::SiteTemplates;

/// Name of the index document in the output root and in each note directory.
pub const INDEX_FILE: &str = "index.html";

/// Execute Phase 4: render the index and all note pages into `output_path`.
///
/// Returns the number of notes rendered.
pub fn execute(templates: &SiteTemplates, notes: &[Note], output_path: &Path) -> Result<usize> {
    let index = templates.render_index(notes)?;
    write_page(&output_path.join(INDEX_FILE), &index)?;
    debug!("Wrote {}", INDEX_FILE);

    for note in notes {
        let (flat, nested) = note_paths(output_path, &note.slug)?;
        let page = templates.render_note(note)?;

        write_page(&flat, &page).map_err(|e| with_slug(&note.slug, e))?;

        if let Some(dir) = nested.parent() {
            fs::create_dir_all(dir).map_err(|e| Error::Filesystem {
                message: format!(
                    "Failed to create directory '{}' for note '{}': {}",
                    dir.display(),
                    note.slug,
                    e
                ),
            })?;
        }
        write_page(&nested, &page).map_err(|e| with_slug(&note.slug, e))?;

        debug!("Wrote pages for '{}'", note.slug);
    }

    info!("Rendered index and {} note pages", notes.len());
    Ok(notes.len())
}

/// Resolve `{slug}.html` and `{slug}/index.html` under `output_path`.
///
/// Slugs are not validated by the generator, but a slug that is empty or
/// contains a path separator would write outside its own page, so it is
/// refused here.
fn note_paths(output_path: &Path, slug: &str) -> Result<(PathBuf, PathBuf)> {
    if slug.is_empty() || slug == "." || slug == ".." || slug.contains(['/', '\\']) {
        return Err(Error::Filesystem {
            message: format!(
                "Refusing to write pages for slug '{}': it does not name a single path component",
                slug
            ),
        });
    }

    Ok((
        output_path.join(format!("{}.html", slug)),
        output_path.join(slug).join(INDEX_FILE),
    ))
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    fs::write(path, page).map_err(|e| Error::Filesystem {
        message: format!("Failed to write '{}': {}", path.display(), e),
    })
}

fn with_slug(slug: &str, err: Error) -> Error {
    match err {
        Error::Filesystem { message } => Error::Filesystem {
            message: format!("{} (note '{}')", message, slug),
        },
        other => other,
    }
}
