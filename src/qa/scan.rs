//! Layer and font scans
//!
//! Combines the zone proximity test and the neighbor classifier over every
//! on-curve node of every contour of a layer, and over every layer of every
//! glyph for batch reporting.

use crate::core::settings::CheckSettings;
use crate::font_source::{Font, FontMaster, Glyph, Layer};
use crate::geometry::{AlignmentZone, Node};
use crate::qa::classifier::node_has_issues;
use crate::qa::preprocess::{prepare_layer, OutlineOps, PreparedLayer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A node reported as close to, but not on, a zone edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlaggedNode {
    pub contour_index: usize,
    pub node_index: usize,
    pub node: Node,
    /// The zone whose near-boundary band the node fell in
    pub zone: AlignmentZone,
}

/// Classify the nodes of an already prepared layer
///
/// Output follows contour order, then node order, then zone order. A node
/// near several zones appears once per zone unless `deduplicate` is set.
pub fn flag_nodes(
    prepared: &PreparedLayer,
    zones: &[AlignmentZone],
    settings: &CheckSettings,
) -> Vec<FlaggedNode> {
    let mut flagged = Vec::new();

    for (contour_index, contour) in prepared.layer.contours.iter().enumerate() {
        for (node_index, node) in contour.on_curve_nodes() {
            for zone in zones {
                if zone.is_near_boundary(prepared.tolerance, node.y())
                    && node_has_issues(contour, node_index, node, settings.neighbor_lookup)
                {
                    flagged.push(FlaggedNode {
                        contour_index,
                        node_index,
                        node: *node,
                        zone: *zone,
                    });
                }
            }
        }
    }

    if settings.deduplicate {
        let mut seen = HashSet::new();
        flagged.retain(|f| seen.insert((f.contour_index, f.node_index)));
    }

    flagged
}

/// Nodes of `layer` that sit suspiciously close to one of `master`'s zones
pub fn nodes_with_issues<O: OutlineOps>(
    layer: &Layer,
    master: &FontMaster,
    settings: &CheckSettings,
    ops: &O,
) -> Vec<FlaggedNode> {
    let prepared = prepare_layer(layer, master, settings, ops);
    let flagged = flag_nodes(&prepared, &master.alignment_zones, settings);
    debug!(
        "Layer '{}': {} nodes scanned, {} flagged (tolerance {})",
        layer.name,
        prepared.layer.node_count(),
        flagged.len(),
        prepared.tolerance
    );
    flagged
}

/// Whether any layer of `glyph` has at least one flagged node
pub fn glyph_has_issues<O: OutlineOps>(
    glyph: &Glyph,
    font: &Font,
    settings: &CheckSettings,
    ops: &O,
) -> bool {
    glyph.layers.iter().any(|layer| match font.master_for(layer) {
        Some(master) => !nodes_with_issues(layer, master, settings, ops).is_empty(),
        None => {
            warn!(
                "Skipping layer '{}' of '{}': unknown master '{}'",
                layer.name, glyph.name, layer.master_id
            );
            false
        }
    })
}

/// Names of the glyphs with at least one flagged node, in font order
pub fn glyphs_with_issues<O: OutlineOps>(
    font: &Font,
    settings: &CheckSettings,
    ops: &O,
) -> Vec<String> {
    font.glyphs
        .iter()
        .filter(|glyph| glyph_has_issues(glyph, font, settings, ops))
        .map(|glyph| glyph.name.clone())
        .collect()
}
