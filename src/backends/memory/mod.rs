//! In-memory file table backend.

mod table;

pub use table::FileTable;
