//! Domain Layer
//!
//! The planning core - pure logic with file probes behind a port.
//!
//! ## Structure
//!
//! - `entities/` - EntryPoint
//! - `value_objects/` - OutputCategory, OutputTemplate, ResolvedOutputPath, Surface
//! - `services/` - BundlePlanner, BundlePlan
//! - `policies/` - Surface requirements for a shippable extension
//! - `ports/` - FileSystem interface

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
