use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::key::FileKey;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FileTableError {
    #[error("file {0} already exists")]
    AlreadyExists(FileKey),

    #[error("file {0} does not exist")]
    NotFound(FileKey),

    #[error("invalid version number {requested} for {key} (current is {current})")]
    InvalidVersion {
        key: FileKey,
        requested: i64,
        current: u64,
    },
}

/// Error kind without payload, for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    InvalidVersion,
}

impl FileTableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FileTableError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            FileTableError::NotFound(_) => ErrorKind::NotFound,
            FileTableError::InvalidVersion { .. } => ErrorKind::InvalidVersion,
        }
    }

    /// The key the failed operation was addressing.
    pub fn key(&self) -> &FileKey {
        match self {
            FileTableError::AlreadyExists(key)
            | FileTableError::NotFound(key)
            | FileTableError::InvalidVersion { key, .. } => key,
        }
    }
}

pub type FileTableResult<T> = Result<T, FileTableError>;
