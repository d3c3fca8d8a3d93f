//! Phase 6: Writing the Sitemap
//!
//! Produces `sitemap.xml` following the sitemaps.org 0.9 protocol: the site
//! root first, then one entry per note in slug order. Every entry carries the
//! same `lastmod`, the build date, rather than a per-note modification time.

use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::note::Note;

/// File name of the sitemap in the output root.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Namespace of the `urlset` root element.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const SITEMAP_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="{{ xmlns | escape_xml }}">
{%- for url in urls %}
  <url>
    <loc>{{ url.loc | escape_xml }}</loc>
    <lastmod>{{ url.lastmod }}</lastmod>
    <changefreq>{{ url.changefreq }}</changefreq>
    <priority>{{ url.priority }}</priority>
  </url>
{%- endfor %}
</urlset>
"#;

/// How often a crawler should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

/// One `<url>` element of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    pub priority: &'static str,
}

/// Build the sitemap entries for `notes`: the site root, then each note.
pub fn entries(notes: &[Note], config: &SiteConfig) -> Vec<SitemapEntry> {
    let base = config.base_url();
    let lastmod = config.build_date().format("%Y-%m-%d").to_string();

    let mut urls = Vec::with_capacity(notes.len() + 1);
    urls.push(SitemapEntry {
        loc: format!("{}/", base),
        lastmod: lastmod.clone(),
        changefreq: ChangeFrequency::Weekly,
        priority: "1.0",
    });
    urls.extend(notes.iter().map(|note| SitemapEntry {
        loc: format!("{}/{}/", base, note.slug),
        lastmod: lastmod.clone(),
        changefreq: ChangeFrequency::Monthly,
        priority: "0.8",
    }));
    urls
}

/// Serialize entries into a sitemap document.
pub fn render(urls: &[SitemapEntry]) -> Result<String> {
    let mut context = Context::new();
    context.insert("xmlns", SITEMAP_XMLNS);
    context.insert("urls", urls);

    // Values are escaped explicitly with `escape_xml`
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_template(SITEMAP_FILE, SITEMAP_TEMPLATE)
        .map_err(|e| Error::template(SITEMAP_FILE, &e))?;
    tera.render(SITEMAP_FILE, &context)
        .map_err(|e| Error::template(SITEMAP_FILE, &e))
}

/// Execute Phase 6: write `sitemap.xml` into the configured output directory.
///
/// Returns the number of URLs listed.
pub fn execute(notes: &[Note], config: &SiteConfig) -> Result<usize> {
    let urls = entries(notes, config);
    let document = render(&urls)?;

    let path = config.output_dir().join(SITEMAP_FILE);
    write_sitemap(&path, &document)?;

    info!("Wrote {} with {} URLs", SITEMAP_FILE, urls.len());
    Ok(urls.len())
}

fn write_sitemap(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).map_err(|e| Error::Filesystem {
        message: format!("Failed to write '{}': {}", path.display(), e),
    })
}
