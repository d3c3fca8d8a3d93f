//! # Note Record Validation
//!
//! The generator renders whatever it can decode. This module is the
//! pre-build gate that checks records are actually publishable. It never
//! runs as part of [`crate::phases::generate`]; callers run it on its own
//! (the `validate` subcommand, or the content test suite).
//!
//! Every issue in every record is collected, so a single pass reports all
//! the fixes a content author has to make.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::filesystem::MemoryFS;
use crate::note::{is_record, Note, NOTE_EXTENSION};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern compiles"));

/// A single problem found in a note record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The record is not valid YAML for a note.
    Unparsable { message: String },
    /// A required field is missing or empty.
    MissingField { field: &'static str },
    SlugHasSpaces,
    SlugNotLowercase,
    /// The slug contains a character outside `[a-z0-9-]`.
    SlugInvalidChar { ch: char },
    /// A bullet or tag is empty or whitespace only.
    BlankEntry { field: &'static str, index: usize },
    LinkMissingLabel { index: usize },
    LinkMissingUrl { index: usize },
    LinkInvalidUrl { index: usize, url: String },
    /// `theme` is present but whitespace only.
    BlankTheme,
    /// The file name is not `{slug}.yaml`.
    FilenameMismatch { filename: String, slug: String },
    /// Another record already uses this slug.
    DuplicateSlug { slug: String, other: PathBuf },
}

impl Issue {
    /// The note field this issue is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Issue::Unparsable { .. } => None,
            Issue::MissingField { field } | Issue::BlankEntry { field, .. } => Some(*field),
            Issue::SlugHasSpaces
            | Issue::SlugNotLowercase
            | Issue::SlugInvalidChar { .. }
            | Issue::FilenameMismatch { .. }
            | Issue::DuplicateSlug { .. } => Some("slug"),
            Issue::LinkMissingLabel { .. }
            | Issue::LinkMissingUrl { .. }
            | Issue::LinkInvalidUrl { .. } => Some("links"),
            Issue::BlankTheme => Some("theme"),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Unparsable { message } => write!(f, "failed to parse YAML: {}", message),
            Issue::MissingField { field } => {
                write!(f, "{} field is required but missing or empty", field)
            }
            Issue::SlugHasSpaces => write!(f, "slug should not contain spaces"),
            Issue::SlugNotLowercase => write!(f, "slug should be lowercase"),
            Issue::SlugInvalidChar { ch } => write!(
                f,
                "slug contains invalid character '{}', should only contain lowercase letters, numbers, and hyphens",
                ch
            ),
            Issue::BlankEntry { field, index } => {
                let entry = field.strip_suffix('s').unwrap_or(*field);
                write!(f, "{} at index {} is empty or whitespace only", entry, index)
            }
            Issue::LinkMissingLabel { index } => write!(f, "link at index {} is missing label", index),
            Issue::LinkMissingUrl { index } => write!(f, "link at index {} is missing url", index),
            Issue::LinkInvalidUrl { index, url } => write!(
                f,
                "link at index {} has invalid URL '{}', should start with http:// or https://",
                index, url
            ),
            Issue::BlankTheme => write!(f, "theme field should not be whitespace only if present"),
            Issue::FilenameMismatch { filename, slug } => write!(
                f,
                "filename '{}' does not match slug '{}' (expected '{}.{}')",
                filename, slug, slug, NOTE_EXTENSION
            ),
            Issue::DuplicateSlug { slug, other } => {
                write!(f, "slug '{}' is also used by {}", slug, other.display())
            }
        }
    }
}

/// Validation result for one record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub file: PathBuf,
    pub issues: Vec<Issue>,
}

impl RecordReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validation result for a whole content collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// One report per record, in path order
    pub records: Vec<RecordReport>,
}

impl ValidationReport {
    /// True when at least one record was checked and none had issues.
    pub fn is_valid(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(RecordReport::is_valid)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.records.iter().map(|r| r.issues.len()).sum()
    }

    /// Look up the report for a record file.
    pub fn record<P: AsRef<Path>>(&self, file: P) -> Option<&RecordReport> {
        self.records.iter().find(|r| r.file == file.as_ref())
    }
}

/// Validate every `*.yaml` record in `records`.
pub fn validate(records: &MemoryFS) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: BTreeMap<String, PathBuf> = BTreeMap::new();

    for (path, file) in records.files() {
        if !is_record(path) {
            continue;
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let issues = match Note::from_yaml(&file.content) {
            Ok(note) => {
                let mut issues = validate_note(&note, &filename);
                if !note.slug.is_empty() {
                    if let Some(other) = seen.get(&note.slug) {
                        issues.push(Issue::DuplicateSlug {
                            slug: note.slug.clone(),
                            other: other.clone(),
                        });
                    } else {
                        seen.insert(note.slug.clone(), path.clone());
                    }
                }
                issues
            }
            Err(e) => vec![Issue::Unparsable {
                message: e.to_string(),
            }],
        };

        report.records.push(RecordReport {
            file: path.clone(),
            issues,
        });
    }

    report
}

/// Check one decoded note. `filename` is the record's file name.
pub fn validate_note(note: &Note, filename: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (field, empty) in [
        ("slug", note.slug.is_empty()),
        ("title", note.title.is_empty()),
        ("thesis", note.thesis.is_empty()),
        ("bullets", note.bullets.is_empty()),
        ("tags", note.tags.is_empty()),
    ] {
        if empty {
            issues.push(Issue::MissingField { field });
        }
    }

    if !note.slug.is_empty() {
        check_slug(&note.slug, &mut issues);
    }

    for (field, entries) in [("bullets", &note.bullets), ("tags", &note.tags)] {
        for (index, entry) in entries.iter().enumerate() {
            if entry.trim().is_empty() {
                issues.push(Issue::BlankEntry { field, index });
            }
        }
    }

    for (index, link) in note.links.iter().enumerate() {
        if link.label.is_empty() {
            issues.push(Issue::LinkMissingLabel { index });
        }
        if link.url.is_empty() {
            issues.push(Issue::LinkMissingUrl { index });
        } else if !link.url.starts_with("http://") && !link.url.starts_with("https://") {
            issues.push(Issue::LinkInvalidUrl {
                index,
                url: link.url.clone(),
            });
        }
    }

    if !note.theme.is_empty() && note.theme.trim().is_empty() {
        issues.push(Issue::BlankTheme);
    }

    if filename != format!("{}.{}", note.slug, NOTE_EXTENSION) {
        issues.push(Issue::FilenameMismatch {
            filename: filename.to_string(),
            slug: note.slug.clone(),
        });
    }

    issues
}

fn check_slug(slug: &str, issues: &mut Vec<Issue>) {
    if slug.contains(' ') {
        issues.push(Issue::SlugHasSpaces);
    }
    if slug.to_lowercase() != slug {
        issues.push(Issue::SlugNotLowercase);
    }
    if !SLUG_PATTERN.is_match(slug) {
        if let Some(ch) = slug
            .chars()
            .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-'))
        {
            issues.push(Issue::SlugInvalidChar { ch });
        }
    }
}
