//! Orchestrator for a complete site build
//!
//! This module coordinates all phases behind a single entry point,
//! [`generate`]. The phases run strictly in order and the first failure
//! aborts the build; a failed build may leave a partial output directory,
//! which the next successful build replaces entirely.

use std::path::PathBuf;

use log::info;

use super::{assets, load, ordering, prepare, render, sitemap};
use crate::config::{SiteConfig, SiteSources};
use crate::error::Result;
use crate::templates::SiteTemplates;

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of notes rendered, each as two pages
    pub notes: usize,
    /// Number of static files copied
    pub assets: usize,
    /// Number of URLs listed in the sitemap
    pub sitemap_urls: usize,
    /// Directory the site was written to
    pub output_dir: PathBuf,
}

/// Build the complete site described by `sources` into the configured output
/// directory.
///
/// Templates are parsed before the output directory is touched, so a broken
/// template set leaves the previous build in place.
pub fn generate(sources: &SiteSources, config: &SiteConfig) -> Result<BuildSummary> {
    let output_dir = config.output_dir();

    // Phase 1: Loading
    let notes = load::execute(&sources.content)?;

    // Phase 2: Ordering
    let notes = ordering::execute(notes)?;

    let templates = SiteTemplates::from_sources(&sources.templates)?;

    // Phase 3: Output preparation
    prepare::execute(output_dir)?;

    // Phase 4: Rendering
    let rendered = render::execute(&templates, &notes, output_dir)?;

    // Phase 5: Static assets
    let copied = assets::execute(&sources.assets, output_dir)?;

    // Phase 6: Sitemap
    let sitemap_urls = sitemap::execute(&notes, config)?;

    info!("Build finished in {}", output_dir.display());
    Ok(BuildSummary {
        notes: rendered,
        assets: copied,
        sitemap_urls,
        output_dir: output_dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filesystem::MemoryFS;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn sources() -> SiteSources {
        let mut templates = MemoryFS::new();
        templates.add_file_string(
            "index.html",
            "{% for n in notes %}<a href=\"/{{ n.slug }}/\">{{ n.title }}</a>{% endfor %}{% include \"footer.html\" %}",
        );
        templates.add_file_string(
            "note.html",
            "<body class=\"theme-{{ theme }}\"><h1>{{ title }}</h1>{% include \"footer.html\" %}</body>",
        );
        templates.add_file_string("footer.html", "<footer>fin</footer>");

        let mut assets = MemoryFS::new();
        assets.add_file_string("style.css", "body {}");

        SiteSources {
            content: MemoryFS::new(),
            templates,
            assets,
        }
    }

    fn config(output: &Path) -> SiteConfig {
        SiteConfig::new(Some("https://example.com"), output)
            .unwrap()
            .with_build_date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
    }

    #[test]
    fn test_generate_full_site() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");
        let mut sources = sources();
        sources
            .content
            .add_file_string("beta.yaml", "slug: beta\ntitle: B\ntheme: dusk\n");
        sources
            .content
            .add_file_string("alpha.yaml", "slug: alpha\ntitle: A\n");

        let summary = generate(&sources, &config(&output)).unwrap();

        assert_eq!(summary.notes, 2);
        assert_eq!(summary.assets, 1);
        assert_eq!(summary.sitemap_urls, 3);
        assert_eq!(summary.output_dir, output);

        assert_eq!(
            fs::read_to_string(output.join("index.html")).unwrap(),
            "<a href=\"/alpha/\">A</a><a href=\"/beta/\">B</a><footer>fin</footer>"
        );
        assert_eq!(
            fs::read_to_string(output.join("alpha.html")).unwrap(),
            "<body class=\"theme-default\"><h1>A</h1><footer>fin</footer></body>"
        );
        assert_eq!(
            fs::read(output.join("beta.html")).unwrap(),
            fs::read(output.join("beta/index.html")).unwrap()
        );
        assert!(output.join("style.css").exists());

        let sitemap = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        let alpha = sitemap.find("https://example.com/alpha/").unwrap();
        let beta = sitemap.find("https://example.com/beta/").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_generate_removes_stale_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");
        fs::create_dir_all(output.join("removed-note")).unwrap();
        fs::write(output.join("removed-note.html"), "old").unwrap();

        generate(&sources(), &config(&output)).unwrap();

        assert!(!output.join("removed-note.html").exists());
        assert!(!output.join("removed-note").exists());
    }

    #[test]
    fn test_generate_replaces_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out");
        fs::write(&output, "a plain file").unwrap();

        let summary = generate(&sources(), &config(&output)).unwrap();

        assert_eq!(summary.notes, 0);
        assert!(output.is_dir());
        assert!(output.join("index.html").exists());
        assert!(output.join("sitemap.xml").exists());
    }

    #[test]
    fn test_generate_decode_error_leaves_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("previous.html"), "kept").unwrap();

        let mut sources = sources();
        sources.content.add_file_string("bad.yaml", "slug: [");

        let err = generate(&sources, &config(&output)).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(output.join("previous.html").exists());
    }

    #[test]
    fn test_generate_duplicate_slugs_fail() {
        let temp_dir = TempDir::new().unwrap();
        let mut sources = sources();
        sources.content.add_file_string("one.yaml", "slug: same\n");
        sources.content.add_file_string("two.yaml", "slug: same\n");

        let err = generate(&sources, &config(temp_dir.path())).unwrap_err();
        assert!(matches!(err, Error::DuplicateSlug { .. }));
    }

    #[test]
    fn test_generate_missing_template_fails_before_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output");
        let mut sources = sources();
        sources.templates = MemoryFS::new();

        let err = generate(&sources, &config(&output)).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_template_error_names_slug() {
        let temp_dir = TempDir::new().unwrap();
        let mut sources = sources();
        sources
            .templates
            .add_file_string("note.html", "{{ undefined_field }}");
        sources.content.add_file_string("gamma.yaml", "slug: gamma\n");

        let err = generate(&sources, &config(temp_dir.path())).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
        assert!(err.to_string().contains("gamma"));
    }
}
