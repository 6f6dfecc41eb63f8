//! Outline node data structures
//!
//! A node is a single point of a glyph contour together with its kind.
//! Classification only cares whether a node is off-curve (a Bézier control
//! point) or on-curve, but the on-curve kinds are kept so reports can show
//! what the host supplied.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Node kind enumeration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// On-curve node reached by a straight segment
    #[serde(rename = "line")]
    Line,
    /// On-curve node reached by a curve segment
    #[serde(rename = "curve")]
    Curve,
    /// Bézier control point
    #[serde(rename = "offcurve")]
    OffCurve,
}

impl NodeKind {
    /// Check if this kind is a control point
    pub fn is_off_curve(&self) -> bool {
        matches!(self, NodeKind::OffCurve)
    }

    /// Check if this kind lies on the rendered outline
    pub fn is_on_curve(&self) -> bool {
        !self.is_off_curve()
    }
}

/// A point in a glyph's outline
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Point,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(x: f64, y: f64, kind: NodeKind) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
        }
    }

    /// Create an on-curve node reached by a line
    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::Line)
    }

    /// Create an on-curve node reached by a curve
    pub fn curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::Curve)
    }

    /// Create an off-curve control point
    pub fn off_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeKind::OffCurve)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn is_off_curve(&self) -> bool {
        self.kind.is_off_curve()
    }

    pub fn is_on_curve(&self) -> bool {
        self.kind.is_on_curve()
    }
}
