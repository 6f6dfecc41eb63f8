//! zonecheck
//!
//! Flags glyph outline nodes lying close to, but not exactly on, a font
//! master's alignment zones.
pub mod core;
pub mod font_source;
pub mod geometry;
pub mod logging;
pub mod qa;

pub use crate::core::settings::CheckSettings;
pub use font_source::{Font, FontMaster, Glyph, Layer};
pub use geometry::{AlignmentZone, Contour, NeighborLookup, Node, NodeKind};
pub use qa::{FlaggedNode, OutlineOps, ZoneChecker};
