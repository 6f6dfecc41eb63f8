//! Check settings and tuning constants

use crate::geometry::NeighborLookup;
use serde::{Deserialize, Serialize};

// =================================================================
// TOLERANCE CONSTANTS
// =================================================================

/// Width of the near-boundary band when a master has no usable stems
pub const DEFAULT_TOLERANCE: f64 = 4.0;
/// Smallest tolerance derived from stem widths
pub const MIN_STEM_TOLERANCE: f64 = 1.0;

/// Neighbor distance when both neighbors are on-curve
pub const ON_CURVE_NEIGHBOR_TOLERANCE: f64 = 20.0;
/// Neighbor distance when an off-curve neighbor is involved
pub const OFF_CURVE_NEIGHBOR_TOLERANCE: f64 = 10.0;

// =================================================================
// PRESENTATION CONSTANTS
// =================================================================

pub const ISSUE_LABEL: &str = "Close to Alignmentzone";
pub const MARKER_SCALE: f64 = 5.0;
/// RGBA
pub const MARKER_COLOR: [f32; 4] = [0.9, 0.1, 0.0, 0.85];

/// Settings for one checker run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Upper bound of the effective tolerance
    pub default_tolerance: f64,
    pub neighbor_lookup: NeighborLookup,
    /// Report a node once even if it is near several zones
    pub deduplicate: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            default_tolerance: DEFAULT_TOLERANCE,
            neighbor_lookup: NeighborLookup::Linear,
            deduplicate: false,
        }
    }
}
