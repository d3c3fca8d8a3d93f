//! Page templates
//!
//! Pages are rendered with [Tera](https://keats.github.io/tera/). Two
//! contracts exist:
//!
//! - `index.html` receives `notes`, the ordered list of every note.
//! - `note.html` receives one note, with its fields (`slug`, `title`,
//!   `thesis`, `quote`, `bullets`, `example`, `diagram`, `links`, `tags`,
//!   `theme`) at the top level of the context.
//!
//! Both are expected to `{% include "footer.html" %}`. Optional fields are
//! `null` when absent, so templates guard them with `{% if quote %}`.
//! Output is HTML-escaped.

use log::debug;
use tera::{Context, Tera};

use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;
use crate::note::Note;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const NOTE_TEMPLATE: &str = "note.html";
pub const FOOTER_TEMPLATE: &str = "footer.html";

const REQUIRED_TEMPLATES: [&str; 3] = [INDEX_TEMPLATE, NOTE_TEMPLATE, FOOTER_TEMPLATE];

/// Parsed template set for one build.
#[derive(Debug)]
pub struct SiteTemplates {
    tera: Tera,
}

impl SiteTemplates {
    /// Parse every template in `sources`.
    ///
    /// All of `index.html`, `note.html` and `footer.html` must be present.
    /// Additional templates are registered too and may be included.
    pub fn from_sources(sources: &MemoryFS) -> Result<Self> {
        for name in REQUIRED_TEMPLATES {
            if !sources.exists(name) {
                return Err(Error::Template {
                    target: name.to_string(),
                    message: "template is missing from the template directory".to_string(),
                });
            }
        }

        let mut raw = Vec::with_capacity(sources.len());
        for (path, file) in sources.files() {
            let name = path.to_string_lossy().into_owned();
            let body = String::from_utf8(file.content.clone()).map_err(|_| Error::Template {
                target: name.clone(),
                message: "template is not valid UTF-8".to_string(),
            })?;
            raw.push((name, body));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(raw)
            .map_err(|e| Error::template("template set", &e))?;
        debug!("Parsed {} templates", sources.len());

        Ok(Self { tera })
    }

    /// Render the index page listing `notes` in the given order.
    pub fn render_index(&self, notes: &[Note]) -> Result<String> {
        let mut context = Context::new();
        context.insert("notes", notes);
        self.tera
            .render(INDEX_TEMPLATE, &context)
            .map_err(|e| Error::template(INDEX_TEMPLATE, &e))
    }

    /// Render the page for one note.
    pub fn render_note(&self, note: &Note) -> Result<String> {
        let context =
            Context::from_serialize(note).map_err(|e| Error::template(&note.slug, &e))?;
        self.tera
            .render(NOTE_TEMPLATE, &context)
            .map_err(|e| Error::template(&note.slug, &e))
    }
}
