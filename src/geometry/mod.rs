//! Geometric Primitives and Operations

pub mod contour;
pub mod node;
pub mod zone;

// Re-export commonly used items
pub use contour::{Contour, NeighborLookup};
pub use node::{Node, NodeKind};
pub use zone::{close_enough, is_near_zone_boundary, AlignmentZone};
