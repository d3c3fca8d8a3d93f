//! # Error Handling
//!
//! This module defines the error type shared by every stage of the build
//! pipeline and by the validator. It uses `thiserror` so each variant carries
//! a readable message that the CLI prints as a single `Error: ...` line.
//!
//! ## Key Components
//!
//! - **`Error`**: one variant per failure class of a build:
//!   configuration, record decoding, duplicate slugs, filesystem access and
//!   template loading or rendering.
//! - **`Result<T>`**: alias for `std::result::Result<T, Error>`.
//!
//! Every variant names the thing that failed (the file, slug, template or
//! path) so a failed build can be traced back to its input.

use std::error::Error as StdError;

use thiserror::Error;

/// Main error type for notesite operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration value is missing or malformed.
    ///
    /// Raised before any output is written.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!(" (hint: {})", h)).unwrap_or_default())]
    Config {
        message: String,
        /// Optional hint for how to fix the configuration
        hint: Option<String>,
    },

    /// A note record could not be decoded.
    #[error("Failed to parse note record {path}: {message}")]
    Decode { path: String, message: String },

    /// Two note records share a slug and would overwrite each other's pages.
    #[error("Duplicate slug '{slug}': every note must have a unique slug")]
    DuplicateSlug { slug: String },

    /// Removing, creating, reading or writing a file or directory failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A template could not be loaded or rendered.
    ///
    /// `target` is the template name when loading, or the slug being rendered.
    #[error("Template error for {target}: {message}")]
    Template { target: String, message: String },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Build a `Template` error from a tera error, flattening its source chain
    /// onto one line.
    pub fn template(target: impl Into<String>, err: &tera::Error) -> Self {
        let mut message = err.to_string();
        let mut source = StdError::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Error::Template {
            target: target.into(),
            message: message.replace('\n', " "),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
