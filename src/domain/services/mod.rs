//! Domain Services
//!
//! Stateless planning logic. File probes go through the `FileSystem` port.

mod plan;
mod planner;

pub use plan::{BundlePlan, SCRIPT_EXT};
pub use planner::{BundlePlanner, DEFAULT_OUT_DIR};
