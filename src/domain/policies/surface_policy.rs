//! Surface Policy
//!
//! A shippable extension declares all three surfaces, each with the kind
//! of source its execution context can load. Planning itself works over
//! any entry set; this policy is applied by strict checks only.

use crate::domain::entities::EntryPoint;
use crate::domain::value_objects::Surface;
use crate::error::ConfigurationError;

/// Check declared entries against the three required surfaces
pub fn check_surfaces(entries: &[EntryPoint]) -> Vec<ConfigurationError> {
    Surface::ALL
        .into_iter()
        .filter_map(|surface| {
            match entries.iter().find(|e| e.surface() == Some(surface)) {
                None => Some(ConfigurationError::MissingSurface { surface }),
                Some(entry) if !surface.accepts_source(entry.source()) => {
                    Some(ConfigurationError::SurfaceKindMismatch {
                        surface,
                        path: entry.source().to_path_buf(),
                        expected: surface.expected_kind(),
                    })
                }
                Some(_) => None,
            }
        })
        .collect()
}
