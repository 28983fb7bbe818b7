//! Core FileTable implementation.

use std::collections::HashMap;

use crate::config::TableConfig;
use crate::error::{FileTableError, FileTableResult};
use crate::key::FileKey;
use crate::types::{FileRecord, VersionReport};

/// In-memory table of versioned file records, keyed by normalized path + name.
///
/// Mutations take `&mut self`; wrap the table in a
/// [`SharedFileTable`](crate::SharedFileTable) to share it between tasks.
#[derive(Debug, Clone, Default)]
pub struct FileTable {
    files: HashMap<FileKey, FileRecord>,
    config: TableConfig,
}

impl FileTable {
    /// Create an empty table with the default config
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            files: HashMap::with_capacity(config.capacity),
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Build the key `name` in `path` resolves to under this table's config.
    pub fn key(&self, name: &str, path: &str) -> FileKey {
        FileKey::new(path, name, &self.config)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str, path: &str) -> bool {
        self.files.contains_key(&self.key(name, path))
    }

    pub fn get(&self, name: &str, path: &str) -> Option<&FileRecord> {
        self.files.get(&self.key(name, path))
    }

    /// All records, ordered by key.
    pub fn records(&self) -> Vec<(&FileKey, &FileRecord)> {
        let mut records: Vec<_> = self.files.iter().collect();
        records.sort_by(|a, b| a.0.cmp(b.0));
        records
    }

    /// Look up a record or fail with `NotFound`
    fn existing(&self, key: &FileKey) -> FileTableResult<&FileRecord> {
        self.files.get(key).ok_or_else(|| {
            tracing::trace!(%key, "file not found");
            FileTableError::NotFound(key.clone())
        })
    }

    /// Fail with `AlreadyExists` if `key` is occupied
    fn vacant(&self, key: &FileKey) -> FileTableResult<()> {
        if self.files.contains_key(key) {
            tracing::trace!(%key, "file already exists");
            return Err(FileTableError::AlreadyExists(key.clone()));
        }
        Ok(())
    }

    pub fn create(&mut self, name: &str, path: &str, contents: &str) -> FileTableResult<()> {
        let key = self.key(name, path);
        self.vacant(&key)?;

        tracing::debug!(%key, "created file");
        self.files.insert(key, FileRecord::new(name, path, contents));
        Ok(())
    }

    /// Remove a record, handing it back to the caller.
    pub fn delete(&mut self, name: &str, path: &str) -> FileTableResult<FileRecord> {
        let key = self.key(name, path);
        let Some(record) = self.files.remove(&key) else {
            tracing::trace!(%key, "file not found");
            return Err(FileTableError::NotFound(key));
        };

        tracing::debug!(%key, "deleted file");
        Ok(record)
    }

    /// Duplicate a record into `dest_path`. The copy is an independent value.
    pub fn copy(&mut self, name: &str, src_path: &str, dest_path: &str) -> FileTableResult<()> {
        let src_key = self.key(name, src_path);
        let dest_key = self.key(name, dest_path);

        let mut copied = self.existing(&src_key)?.clone();
        self.vacant(&dest_key)?;

        copied.path = dest_path.to_string();
        tracing::debug!(src = %src_key, dest = %dest_key, version = copied.version, "copied file");
        self.files.insert(dest_key, copied);
        Ok(())
    }

    /// Relocate a record to `dest_path`, re-keying it.
    ///
    /// Moving onto the source key itself counts as an occupied destination.
    pub fn move_file(&mut self, name: &str, src_path: &str, dest_path: &str) -> FileTableResult<()> {
        let src_key = self.key(name, src_path);
        let dest_key = self.key(name, dest_path);

        self.existing(&src_key)?;
        self.vacant(&dest_key)?;

        let mut record = self
            .files
            .remove(&src_key)
            .ok_or_else(|| FileTableError::NotFound(src_key.clone()))?;
        record.path = dest_path.to_string();

        tracing::debug!(src = %src_key, dest = %dest_key, "moved file");
        self.files.insert(dest_key, record);
        Ok(())
    }

    /// Replace the contents and bump the version. Returns the new version.
    pub fn save_version(&mut self, name: &str, path: &str, contents: &str) -> FileTableResult<u64> {
        let key = self.key(name, path);
        let Some(record) = self.files.get_mut(&key) else {
            tracing::trace!(%key, "file not found");
            return Err(FileTableError::NotFound(key));
        };

        record.version += 1;
        record.contents = contents.to_string();

        tracing::debug!(%key, version = record.version, "saved new version");
        Ok(record.version)
    }

    /// Report on `version` of a record without changing it.
    ///
    /// Earlier contents are not kept, so the report always carries the
    /// current contents for any version in `1..=current`.
    pub fn switch_version(&self, name: &str, path: &str, version: i64) -> FileTableResult<VersionReport> {
        let key = self.key(name, path);
        let record = self.existing(&key)?;

        let requested = match u64::try_from(version) {
            Ok(v) if (1..=record.version).contains(&v) => v,
            _ => {
                tracing::trace!(%key, requested = version, current = record.version, "invalid version");
                return Err(FileTableError::InvalidVersion {
                    key,
                    requested: version,
                    current: record.version,
                });
            }
        };

        Ok(VersionReport {
            name: record.name.clone(),
            path: record.path.clone(),
            version: requested,
            contents: record.contents.clone(),
        })
    }
}
