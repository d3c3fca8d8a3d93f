//! Shared test utilities for E2E tests.
//!
//! This module provides a site fixture and record snippets to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let site = SiteFixture::new().with_minimal_templates();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::records;
    #[allow(unused_imports)]
    pub use super::SiteFixture;
}

/// Note record snippets for testing.
#[allow(dead_code)]
pub mod records {
    /// A complete, valid record for slug `alpha`.
    pub const ALPHA: &str = r#"slug: alpha
title: A
thesis: T
bullets: [b1]
tags: [t1]
"#;

    /// A valid record for slug `beta`.
    pub const BETA: &str = r#"slug: beta
title: B
thesis: T
bullets: [b1]
tags: [t1]
"#;

    /// A record with no title; it still renders.
    pub const UNTITLED: &str = r#"slug: untitled
thesis: T
bullets: [b1]
tags: [t1]
"#;

    /// Text that is not a note record.
    pub const INVALID_YAML: &str = "slug: [unclosed";
}

/// Index template listing each slug on its own line.
pub const INDEX_TEMPLATE: &str = "{% for note in notes %}{{ note.slug }}\n{% endfor %}";

/// Note template wrapping the title in a heading.
pub const NOTE_TEMPLATE: &str = "<h1>{{ title }}</h1>{% include \"footer.html\" %}";

/// Footer included by the note template.
pub const FOOTER_TEMPLATE: &str = "<footer></footer>";

/// A temporary site directory with `content/`, `templates/` and `static/`.
///
/// # Example
///
/// ```rust,ignore
/// let site = SiteFixture::new()
///     .with_minimal_templates()
///     .with_note("alpha", records::ALPHA);
///
/// site.build_command().assert().success();
/// ```
pub struct SiteFixture {
    temp_dir: assert_fs::TempDir,
}

impl SiteFixture {
    /// Create a fixture with empty `content/`, `templates/` and `static/`.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for dir in ["content", "templates", "static"] {
            temp_dir
                .child(dir)
                .create_dir_all()
                .expect("Failed to create site directory");
        }
        Self { temp_dir }
    }

    /// Add the three required templates.
    pub fn with_minimal_templates(self) -> Self {
        self.with_file("templates/index.html", INDEX_TEMPLATE)
            .with_file("templates/note.html", NOTE_TEMPLATE)
            .with_file("templates/footer.html", FOOTER_TEMPLATE)
    }

    /// Add a record as `content/{name}.yaml`.
    pub fn with_note(self, name: &str, content: &str) -> Self {
        self.with_file(&format!("content/{}.yaml", name), content)
    }

    /// Add a static asset as `static/{name}`.
    #[allow(dead_code)]
    pub fn with_asset(self, name: &str, content: &str) -> Self {
        self.with_file(&format!("static/{}", name), content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the output directory.
    #[allow(dead_code)]
    pub fn output(&self) -> PathBuf {
        self.temp_dir.path().join("output")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `build` command run from the site root with `BASEURL` cleared.
    ///
    /// Callers add `--base-url` or set `BASEURL` themselves.
    #[allow(dead_code)]
    pub fn build_command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("notesite");
        cmd.current_dir(self.path())
            .env_remove("BASEURL")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("build");
        cmd
    }

    /// A `validate` command run from the site root.
    #[allow(dead_code)]
    pub fn validate_command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("notesite");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("validate");
        cmd
    }
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self::new()
    }
}
