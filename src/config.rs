//! # Build Configuration
//!
//! A build takes two kinds of input:
//!
//! - **`SiteConfig`**: the values that shape the output but are not content:
//!   the base URL the site is served from, the output directory, and the
//!   build date stamped into the sitemap.
//! - **`SiteSources`**: the three flat source collections the pipeline reads:
//!   note records, templates and static assets.
//!
//! The base URL has no default. A `SiteConfig` cannot be constructed without
//! one, so a build without it fails before anything is read or written.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use url::Url;

use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;

/// Environment variable the CLI reads the base URL from.
pub const BASE_URL_ENV: &str = "BASEURL";

/// Values controlling where and how a site is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
    output_dir: PathBuf,
    build_date: NaiveDate,
}

impl SiteConfig {
    /// Create a configuration dated today (UTC).
    ///
    /// Fails with [`Error::Config`] when `base_url` is absent, blank, or not
    /// an absolute URL. A single trailing `/` is dropped so that page
    /// locations never contain `//`.
    pub fn new(base_url: Option<&str>, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_url = base_url.map(str::trim).unwrap_or_default();
        if base_url.is_empty() {
            return Err(Error::Config {
                message: "base URL must be set".to_string(),
                hint: Some(format!(
                    "pass --base-url or set the {} environment variable",
                    BASE_URL_ENV
                )),
            });
        }

        Url::parse(base_url).map_err(|e| Error::Config {
            message: format!("base URL '{}' is not an absolute URL: {}", base_url, e),
            hint: Some("use a full origin such as https://notes.example.com".to_string()),
        })?;

        Ok(Self {
            base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
            output_dir: output_dir.into(),
            build_date: Utc::now().date_naive(),
        })
    }

    /// Replace the build date, e.g. to make sitemap output reproducible.
    pub fn with_build_date(mut self, build_date: NaiveDate) -> Self {
        self.build_date = build_date;
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn build_date(&self) -> NaiveDate {
        self.build_date
    }
}

/// The source collections a build reads from.
#[derive(Debug, Clone, Default)]
pub struct SiteSources {
    /// Note records (`*.yaml`)
    pub content: MemoryFS,
    /// Page templates, including `index.html`, `note.html` and `footer.html`
    pub templates: MemoryFS,
    /// Files copied verbatim to the output root
    pub assets: MemoryFS,
}

impl SiteSources {
    /// Load all three collections from directories on disk.
    pub fn load(content_dir: &Path, templates_dir: &Path, static_dir: &Path) -> Result<Self> {
        Ok(Self {
            content: MemoryFS::load_flat(content_dir)?,
            templates: MemoryFS::load_flat(templates_dir)?,
            assets: MemoryFS::load_flat(static_dir)?,
        })
    }
}
