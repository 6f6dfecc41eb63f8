//! Neighbor-context classification of near-zone nodes
//!
//! A node close to a zone edge is only an issue when its neighbors suggest an
//! unintended near-miss. The tangent point of a smooth curve sits near the
//! edge with its handles at the same height; a flat stretch does the same
//! with on-curve neighbors. Nodes whose neighbors move well away vertically
//! are expected overshoots and are left alone.

use crate::core::settings::{OFF_CURVE_NEIGHBOR_TOLERANCE, ON_CURVE_NEIGHBOR_TOLERANCE};
use crate::geometry::{close_enough, Contour, NeighborLookup, Node};

/// Decide whether the on-curve node at `index` of `contour` is flagged
///
/// Only meant for nodes that already passed the zone proximity test.
pub fn node_has_issues(contour: &Contour, index: usize, node: &Node, lookup: NeighborLookup) -> bool {
    let (before, after) = contour.neighbors(index, lookup);
    neighbors_flag(node, before, after)
}

/// The rule table over the (predecessor, successor) pair
pub fn neighbors_flag(node: &Node, before: Option<&Node>, after: Option<&Node>) -> bool {
    let near = |other: &Node, tolerance: f64| close_enough(node.y(), other.y(), tolerance);

    match (before, after) {
        (Some(before), Some(after)) => match (before.is_off_curve(), after.is_off_curve()) {
            (false, false) => {
                near(before, ON_CURVE_NEIGHBOR_TOLERANCE) || near(after, ON_CURVE_NEIGHBOR_TOLERANCE)
            }
            (true, true) => {
                near(before, OFF_CURVE_NEIGHBOR_TOLERANCE)
                    || near(after, OFF_CURVE_NEIGHBOR_TOLERANCE)
            }
            (true, false) => near(before, OFF_CURVE_NEIGHBOR_TOLERANCE),
            (false, true) => near(after, OFF_CURVE_NEIGHBOR_TOLERANCE),
        },
        // Contour end: a lone on-curve neighbor always flags
        (Some(only), None) | (None, Some(only)) => {
            only.is_on_curve() || near(only, OFF_CURVE_NEIGHBOR_TOLERANCE)
        }
        (None, None) => true,
    }
}
