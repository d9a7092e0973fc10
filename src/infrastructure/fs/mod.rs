//! File system adapters

mod discovery;
mod local;
mod memory;

pub use discovery::{discover_assets, IGNORE_FILE_NAME};
pub use local::LocalFs;
pub use memory::MemoryFs;
