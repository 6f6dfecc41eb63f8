//! Alignment zones and proximity predicates
//!
//! A zone is a horizontal band anchored at `position`. A positive `size`
//! extends it upward, a negative one downward. Nodes are expected to sit
//! exactly on a zone edge or inside the band; a node just outside it is what
//! the reporter looks for.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignmentZone {
    /// Y coordinate of the anchored edge
    pub position: f64,
    /// Signed height of the band
    pub size: f64,
}

impl AlignmentZone {
    pub fn new(position: f64, size: f64) -> Self {
        Self { position, size }
    }

    /// The closed interior `[lo, hi]` of the zone
    pub fn interior(&self) -> (f64, f64) {
        let other = self.position + self.size;
        (self.position.min(other), self.position.max(other))
    }

    pub fn contains(&self, y: f64) -> bool {
        let (lo, hi) = self.interior();
        y >= lo && y <= hi
    }

    /// Whether `y` is within `tolerance` outside one of the zone's edges
    pub fn is_near_boundary(&self, tolerance: f64, y: f64) -> bool {
        is_near_zone_boundary(tolerance, self.position, self.size, y)
    }
}

/// Decide whether `y` falls in the band of width `tolerance` just outside
/// the zone anchored at `position` with signed `size`.
///
/// The open side of each band faces the zone, so edge values themselves are
/// never reported. A non-positive or non-finite tolerance never matches.
pub fn is_near_zone_boundary(tolerance: f64, position: f64, size: f64, y: f64) -> bool {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return false;
    }

    if size >= 0.0 {
        let below = y >= position - tolerance && y < position;
        let top = position + size;
        let above = y > top && y <= top + tolerance;
        below || above
    } else {
        let above = y > position && y <= position + tolerance;
        let bottom = position + size;
        let below = y >= bottom - tolerance && y < bottom;
        above || below
    }
}

/// `|a - b| <= tolerance`
pub fn close_enough(a: f64, b: f64, tolerance: f64) -> bool {
    let diff = a - b;
    diff <= tolerance && diff >= -tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 4.0;

    #[test]
    fn test_upward_zone_edges() {
        // x-height style zone: [500, 516]
        assert!(!is_near_zone_boundary(TOL, 500.0, 16.0, 500.0));
        assert!(is_near_zone_boundary(TOL, 500.0, 16.0, 496.0));
        assert!(!is_near_zone_boundary(TOL, 500.0, 16.0, 495.999));
        assert!(is_near_zone_boundary(TOL, 500.0, 16.0, 499.5));
        assert!(!is_near_zone_boundary(TOL, 500.0, 16.0, 516.0));
        assert!(is_near_zone_boundary(TOL, 500.0, 16.0, 516.5));
        assert!(is_near_zone_boundary(TOL, 500.0, 16.0, 520.0));
        assert!(!is_near_zone_boundary(TOL, 500.0, 16.0, 520.001));
    }

    #[test]
    fn test_downward_zone_edges() {
        // baseline style zone: [-16, 0]
        assert!(!is_near_zone_boundary(TOL, 0.0, -16.0, 0.0));
        assert!(is_near_zone_boundary(TOL, 0.0, -16.0, 0.001));
        assert!(is_near_zone_boundary(TOL, 0.0, -16.0, 4.0));
        assert!(!is_near_zone_boundary(TOL, 0.0, -16.0, 4.001));
        assert!(!is_near_zone_boundary(TOL, 0.0, -16.0, -16.0));
        assert!(is_near_zone_boundary(TOL, 0.0, -16.0, -16.5));
        assert!(is_near_zone_boundary(TOL, 0.0, -16.0, -20.0));
        assert!(!is_near_zone_boundary(TOL, 0.0, -16.0, -20.001));
    }

    #[test]
    fn test_interior_is_never_near() {
        for zone in [AlignmentZone::new(500.0, 16.0), AlignmentZone::new(0.0, -16.0)] {
            let (lo, hi) = zone.interior();
            let mut y = lo + 0.25;
            while y < hi {
                assert!(zone.contains(y));
                assert!(!zone.is_near_boundary(TOL, y), "{y} inside {zone:?}");
                y += 0.25;
            }
        }
    }

    #[test]
    fn test_zero_size_zone() {
        assert!(is_near_zone_boundary(TOL, 700.0, 0.0, 698.0));
        assert!(is_near_zone_boundary(TOL, 700.0, 0.0, 702.0));
        assert!(!is_near_zone_boundary(TOL, 700.0, 0.0, 700.0));
    }

    #[test]
    fn test_degenerate_tolerance_never_matches() {
        assert!(!is_near_zone_boundary(0.0, 500.0, 16.0, 500.0));
        assert!(!is_near_zone_boundary(-4.0, 500.0, 16.0, 497.0));
        assert!(!is_near_zone_boundary(f64::NAN, 500.0, 16.0, 497.0));
        assert!(!is_near_zone_boundary(f64::INFINITY, 500.0, 16.0, 497.0));
    }

    #[test]
    fn test_close_enough_is_symmetric_and_inclusive() {
        assert!(close_enough(100.0, 120.0, 20.0));
        assert!(close_enough(120.0, 100.0, 20.0));
        assert!(!close_enough(100.0, 120.5, 20.0));
        assert!(!close_enough(120.5, 100.0, 20.0));
        for (a, b) in [(0.0, 3.0), (-7.5, 2.0), (12.0, 12.0)] {
            assert_eq!(close_enough(a, b, 5.0), close_enough(b, a, 5.0));
        }
    }

    #[test]
    fn test_interior_orders_edges() {
        assert_eq!(AlignmentZone::new(0.0, -16.0).interior(), (-16.0, 0.0));
        assert_eq!(AlignmentZone::new(500.0, 16.0).interior(), (500.0, 516.0));
    }
}
