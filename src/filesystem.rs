//! In-memory source collections
//!
//! Content records, templates and static assets all enter the pipeline as a
//! [`MemoryFS`]: a flat map from file name to bytes. A collection is either
//! read from a directory with [`MemoryFS::load_flat`] or assembled in memory,
//! which lets the whole build run against synthetic fixtures.

use crate::error::{Error, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Represents a file with content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// File content as bytes
    pub content: Vec<u8>,
}

impl File {
    /// Create a new file with content
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    /// Create a new file from string content
    pub fn from_string(content: &str) -> Self {
        Self::new(content.as_bytes().to_vec())
    }
}

/// In-memory filesystem keyed by relative path, iterated in path order
#[derive(Debug, Clone, Default)]
pub struct MemoryFS {
    files: BTreeMap<PathBuf, File>,
}

impl MemoryFS {
    /// Create a new empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the regular files directly inside `dir`.
    ///
    /// Subdirectories are skipped, not descended into. A missing or
    /// unreadable directory is an error.
    pub fn load_flat(dir: &Path) -> Result<Self> {
        let mut memfs = Self::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::Filesystem {
                message: format!("Failed to read directory '{}': {}", dir.display(), e),
            })?;

            if entry.file_type().is_dir() {
                debug!("Skipping directory {}", entry.path().display());
                continue;
            }

            let content = fs::read(entry.path()).map_err(|e| Error::Filesystem {
                message: format!("Failed to read file '{}': {}", entry.path().display(), e),
            })?;
            memfs.add_file_content(entry.file_name(), content);
        }

        debug!("Loaded {} files from {}", memfs.len(), dir.display());
        Ok(memfs)
    }

    /// Add or update a file
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, file: File) {
        self.files.insert(path.as_ref().to_path_buf(), file);
    }

    /// Add a file with content
    pub fn add_file_content<P: AsRef<Path>>(&mut self, path: P, content: Vec<u8>) {
        self.add_file(path, File::new(content))
    }

    /// Add a file with string content
    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) {
        self.add_file(path, File::from_string(content))
    }

    /// Get a file by path
    pub fn get_file<P: AsRef<Path>>(&self, path: P) -> Option<&File> {
        self.files.get(path.as_ref())
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// List all files in path order
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files.keys().cloned().collect()
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if filesystem is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over all files as (path, file) pairs, in path order
    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &File)> {
        self.files.iter()
    }
}
