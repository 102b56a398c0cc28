//! Avoid list management module
//!
//! Holds the forbidden substrings a hardened password must not contain,
//! and loads them from newline-delimited files.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable the CLI falls back to for the avoid list path.
pub const AVOID_LIST_PATH_ENV: &str = "PWD_AVOID_LIST_PATH";

#[derive(Error, Debug)]
pub enum AvoidListError {
    #[error("Avoid list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read avoid list file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Ordered list of forbidden substrings.
///
/// Entries are matched literally and case-sensitively, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvoidList {
    entries: Vec<String>,
}

impl AvoidList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Parses newline-delimited content, one entry per line.
    ///
    /// Line terminators are stripped and other whitespace is kept. Blank
    /// lines are entries too; only the final newline does not start one.
    pub fn parse(content: &str) -> Self {
        content.lines().map(str::to_owned).collect()
    }

    /// Loads the avoid list from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    ///
    /// An empty file is not an error; it yields an empty list.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AvoidListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Avoid list loading FAILED: FileNotFound {:?}", path);
            return Err(AvoidListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::parse(&content);

        #[cfg(feature = "tracing")]
        tracing::info!("Avoid list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for AvoidList {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl<S: Into<String>> FromIterator<S> for AvoidList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
