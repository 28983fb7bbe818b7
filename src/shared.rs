//! Lock-guarded handle for sharing one table between tasks.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::backend::FileBackend;
use crate::backends::FileTable;
use crate::error::FileTableResult;
use crate::types::{FileRecord, VersionReport};

/// Cloneable handle to a single [`FileTable`] behind one `RwLock`.
///
/// Every operation holds the lock for its whole duration, so no caller can
/// observe a half-applied copy or move.
#[derive(Debug, Clone, Default)]
pub struct SharedFileTable {
    table: Arc<RwLock<FileTable>>,
}

impl SharedFileTable {
    pub fn new(table: FileTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }

    /// Recover the table if this is the last handle, otherwise give the handle back.
    pub fn into_inner(self) -> Result<FileTable, Self> {
        Arc::try_unwrap(self.table)
            .map(RwLock::into_inner)
            .map_err(|table| Self { table })
    }
}

impl From<FileTable> for SharedFileTable {
    fn from(table: FileTable) -> Self {
        Self::new(table)
    }
}

#[async_trait::async_trait]
impl FileBackend for SharedFileTable {
    async fn create(&self, name: &str, path: &str, contents: &str) -> FileTableResult<()> {
        self.table.write().await.create(name, path, contents)
    }

    async fn delete(&self, name: &str, path: &str) -> FileTableResult<FileRecord> {
        self.table.write().await.delete(name, path)
    }

    async fn copy(&self, name: &str, src_path: &str, dest_path: &str) -> FileTableResult<()> {
        self.table.write().await.copy(name, src_path, dest_path)
    }

    async fn move_file(&self, name: &str, src_path: &str, dest_path: &str) -> FileTableResult<()> {
        self.table.write().await.move_file(name, src_path, dest_path)
    }

    async fn save_version(&self, name: &str, path: &str, contents: &str) -> FileTableResult<u64> {
        self.table.write().await.save_version(name, path, contents)
    }

    async fn switch_version(
        &self,
        name: &str,
        path: &str,
        version: i64,
    ) -> FileTableResult<VersionReport> {
        self.table.read().await.switch_version(name, path, version)
    }

    async fn get(&self, name: &str, path: &str) -> Option<FileRecord> {
        self.table.read().await.get(name, path).cloned()
    }
}
