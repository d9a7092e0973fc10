//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod fs;

pub use fs::{discover_assets, LocalFs, MemoryFs};
