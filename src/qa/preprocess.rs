//! Layer preprocessing before classification
//!
//! Classification always runs against a decomposed, overlap-free copy of the
//! layer. Both geometry operations belong to the host and are reached through
//! [`OutlineOps`]; the original layer is never modified.

use crate::core::settings::{CheckSettings, MIN_STEM_TOLERANCE};
use crate::font_source::{FontMaster, Layer};
use tracing::{debug, warn};

/// Geometry operations supplied by the host editor
pub trait OutlineOps {
    /// Expand corner components into literal contour geometry
    fn decompose_corners(&self, layer: &Layer) -> Layer;

    /// Boolean-union self-intersecting contours into a simple outline
    fn remove_overlap(&self, layer: &Layer) -> Layer;
}

impl<T: OutlineOps + ?Sized> OutlineOps for &T {
    fn decompose_corners(&self, layer: &Layer) -> Layer {
        (**self).decompose_corners(layer)
    }

    fn remove_overlap(&self, layer: &Layer) -> Layer {
        (**self).remove_overlap(layer)
    }
}

/// Host without geometry support: outlines are used as supplied
///
/// Corner components cannot be expanded, so they are dropped from the copy
/// and only the plain contours are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl OutlineOps for Passthrough {
    fn decompose_corners(&self, layer: &Layer) -> Layer {
        warn!(
            "Layer '{}' has {} corner components that cannot be expanded; checking plain contours",
            layer.name,
            layer.corner_components.len()
        );
        let mut copy = layer.clone();
        copy.corner_components.clear();
        copy
    }

    fn remove_overlap(&self, layer: &Layer) -> Layer {
        layer.clone()
    }
}

/// A layer copy ready for classification
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedLayer {
    pub layer: Layer,
    pub tolerance: f64,
}

/// Tolerance for a master, derived from its mean stem width
///
/// Thin designs get a tighter band: `mean - 1`, never below 1. Masters with a
/// mean at or above the default, or without stems, use the default.
pub fn effective_tolerance(master: &FontMaster, default_tolerance: f64) -> f64 {
    match master.mean_stem_width() {
        Some(mean) if mean.is_finite() && mean < default_tolerance => {
            (mean - 1.0).max(MIN_STEM_TOLERANCE)
        }
        _ => default_tolerance,
    }
}

pub fn prepare_layer<O: OutlineOps>(
    layer: &Layer,
    master: &FontMaster,
    settings: &CheckSettings,
    ops: &O,
) -> PreparedLayer {
    let decomposed = if layer.has_corner_components() {
        debug!("Decomposing corners of layer '{}'", layer.name);
        Some(ops.decompose_corners(layer))
    } else {
        None
    };
    let tolerance = effective_tolerance(master, settings.default_tolerance);
    let layer = ops.remove_overlap(decomposed.as_ref().unwrap_or(layer));

    PreparedLayer { layer, tolerance }
}
