//! extplan - output layout planner for browser extension bundles
//!
//! A browser extension ships three independent bundles: the popup page,
//! the background service worker and the content script. extplan maps
//! each declared entry point to a deterministic output path using
//! Rollup-style naming templates (`src/[name]/index.js`,
//! `assets/[name].[ext]`), and refuses to plan a build in which a surface
//! would be missing or two surfaces would overwrite each other.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod telemetry;

// Re-exports for convenience
pub use application::{CheckOptions, CheckReport, PlanRequest};
pub use config::{Config, LoadedConfig};
pub use domain::entities::EntryPoint;
pub use domain::services::{BundlePlan, BundlePlanner};
pub use domain::value_objects::{
    OutputCategory, OutputTemplate, OutputTemplates, ResolvedOutputPath, Surface,
};
pub use error::{ConfigurationError, PlanResult};
