pub mod memory;

pub use memory::FileTable;
