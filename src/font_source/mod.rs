//! Font source data structures
//!
//! This module contains the in-memory font model the checker works on
//! (masters, glyphs, layers) and the conversion from UFO data.

pub mod conversions;
pub mod data;

// Explicit re-exports for public API
pub use conversions::UFO_MASTER_ID;
pub use data::{CornerComponent, Font, FontMaster, Glyph, Layer};
