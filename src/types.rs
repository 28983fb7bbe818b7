//! Core types: file records and version reports.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One logical file held by a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    /// Directory label as supplied by the caller. Not validated.
    pub path: String,
    /// Latest contents only; earlier versions are not retained.
    pub contents: String,
    pub version: u64,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            contents: contents.into(),
            version: 1,
        }
    }
}

/// Result of switching to a version.
///
/// Only the latest contents exist, so `contents` is always the record's
/// current contents whatever `version` was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionReport {
    pub name: String,
    pub path: String,
    pub version: u64,
    pub contents: String,
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Old version of {} (Version {}):\n{}",
            self.name, self.version, self.contents
        )
    }
}
