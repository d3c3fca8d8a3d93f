//! # notesite
//!
//! This library turns a directory of short YAML notes into a static website:
//! an index page, two equivalent pages per note, the site's static assets,
//! and a `sitemap.xml`. It backs the `notesite` command-line tool but takes
//! all of its inputs explicitly, so builds can also run against in-memory
//! fixtures.
//!
//! ## Quick Example
//!
//! ```no_run
//! use notesite::config::{SiteConfig, SiteSources};
//! use notesite::phases;
//!
//! let mut sources = SiteSources::default();
//! sources.content.add_file_string(
//!     "alpha.yaml",
//!     "slug: alpha\ntitle: A\nthesis: T\nbullets: [b1]\ntags: [t1]\n",
//! );
//! sources.templates.add_file_string("index.html", "{% for n in notes %}{{ n.title }}{% endfor %}");
//! sources.templates.add_file_string("note.html", "<h1>{{ title }}</h1>{% include \"footer.html\" %}");
//! sources.templates.add_file_string("footer.html", "<footer></footer>");
//!
//! let config = SiteConfig::new(Some("https://example.com"), "output").unwrap();
//! let summary = phases::generate(&sources, &config).unwrap();
//! assert_eq!(summary.notes, 1);
//!
//! // Validation is a separate step
//! let report = notesite::validate::validate(&sources.content);
//! assert!(report.is_valid());
//! ```
//!
//! ## Core Concepts
//!
//! - **Notes (`note`)**: the record format and its decoding defaults.
//! - **Source collections (`filesystem`)**: flat in-memory maps of file name
//!   to bytes for content, templates and assets.
//! - **Configuration (`config`)**: the required base URL, output directory
//!   and build date.
//! - **Templates (`templates`)**: the index and note page contracts.
//! - **Phases (`phases`)**: the build pipeline, from loading records to
//!   writing the sitemap.
//! - **Validation (`validate`)**: the independent pre-build check of records.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod note;
pub mod output;
pub mod phases;
pub mod templates;
pub mod validate;

#[cfg(test)]
mod ordering_proptest;
