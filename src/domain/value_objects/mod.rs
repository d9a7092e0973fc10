//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod output_path;
mod surface;
mod template;

pub use category::OutputCategory;
pub use output_path::{split_asset_name, ResolvedOutputPath};
pub use surface::Surface;
pub use template::{OutputTemplate, OutputTemplates};
