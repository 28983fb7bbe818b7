//! filetable: an in-memory table of versioned file records with create, delete,
//! copy, move and linear version counters.

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod key;
pub mod shared;
pub mod types;

// Re-export
pub use backend::FileBackend;
pub use backends::FileTable;
pub use config::TableConfig;
pub use error::{ErrorKind, FileTableError, FileTableResult};
pub use key::FileKey;
pub use shared::SharedFileTable;
pub use types::*;
