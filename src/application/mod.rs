//! Application Layer
//!
//! Use cases that orchestrate the planning flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain planning rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PlanUseCase` - Resolve entries, then place chunks and assets
//! - `CheckUseCase` - Collect every configuration problem

pub mod check;
pub mod plan;

pub use check::{CheckOptions, CheckReport, CheckUseCase};
pub use plan::{build_planner, PlanRequest, PlanUseCase};
