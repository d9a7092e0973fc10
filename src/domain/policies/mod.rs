//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod surface_policy;

pub use surface_policy::check_surfaces;
