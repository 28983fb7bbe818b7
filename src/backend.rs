use crate::error::FileTableResult;
use crate::types::{FileRecord, VersionReport};

/// Async file-table operations for callers that share a table between tasks.
///
/// Each call runs to completion as one unit against the underlying table.
#[async_trait::async_trait]
pub trait FileBackend: Send + Sync + 'static {
    async fn create(&self, name: &str, path: &str, contents: &str) -> FileTableResult<()>;

    async fn delete(&self, name: &str, path: &str) -> FileTableResult<FileRecord>;

    async fn copy(&self, name: &str, src_path: &str, dest_path: &str) -> FileTableResult<()>;

    async fn move_file(&self, name: &str, src_path: &str, dest_path: &str) -> FileTableResult<()>;

    async fn save_version(&self, name: &str, path: &str, contents: &str) -> FileTableResult<u64>;

    async fn switch_version(
        &self,
        name: &str,
        path: &str,
        version: i64,
    ) -> FileTableResult<VersionReport>;

    /// Snapshot of a record, if present.
    async fn get(&self, name: &str, path: &str) -> Option<FileRecord>;
}
