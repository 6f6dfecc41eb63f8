//! Marker geometry for flagged nodes
//!
//! The checker does not draw. It hands the host a filled triangle anchored
//! at each flagged node plus the label text, in glyph coordinates.

use crate::core::settings::{ISSUE_LABEL, MARKER_COLOR, MARKER_SCALE};
use crate::qa::scan::FlaggedNode;
use kurbo::{BezPath, Point, Vec2};

#[derive(Debug, Clone)]
pub struct IssueMarker {
    pub anchor: Point,
    pub shape: BezPath,
    pub label: &'static str,
    /// RGBA fill
    pub color: [f32; 4],
}

/// Triangle with its tip on `anchor`, leaning up and to the right
pub fn triangle_at(anchor: Point, scale: f64) -> BezPath {
    let second = anchor + Vec2::new(10.0 * scale, 50.0 * scale);
    let third = second + Vec2::new(40.0 * scale, -40.0 * scale);

    let mut path = BezPath::new();
    path.move_to(anchor);
    path.line_to(second);
    path.line_to(third);
    path.close_path();
    path
}

pub fn issue_markers(flagged: &[FlaggedNode]) -> Vec<IssueMarker> {
    flagged
        .iter()
        .map(|f| IssueMarker {
            anchor: f.node.position,
            shape: triangle_at(f.node.position, MARKER_SCALE),
            label: ISSUE_LABEL,
            color: MARKER_COLOR,
        })
        .collect()
}
