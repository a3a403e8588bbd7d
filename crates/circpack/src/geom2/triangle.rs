//! Triangle with its incircle and vertex distances, derived in one pass.
//!
//! Notation: vertices `A`, `B`, `C`; side lengths `a = |BC|`, `b = |CA|`,
//! `c = |AB|` (each named after the opposite vertex).

#[cfg(feature = "serde")]
use serde::Serialize;

use super::circle::Circle;
use super::types::{GeomCfg, Point2, Vertex};
use super::util::parallelogram_area;
use crate::error::{Error, Result};

/// Non-degenerate triangle `ABC` with derived geometry.
///
/// Invariants:
/// - `area > cfg.eps_degenerate · perimeter²` (checked in the constructor).
/// - All derived fields are consistent with `vertices`; there is no setter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Triangle {
    vertices: [Point2; 3],
    sides: [f64; 3],
    signed_area: f64,
    perimeter: f64,
    incircle: Circle,
    dist_to_incenter: [f64; 3],
}

impl Triangle {
    /// Build with default tolerances.
    pub fn new(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        Self::with_cfg(a, b, c, GeomCfg::default())
    }

    #[inline]
    pub fn from_points(pts: &[Point2; 3]) -> Result<Self> {
        Self::new(pts[0], pts[1], pts[2])
    }

    /// Build and derive area, sides, perimeter, incircle and vertex distances.
    ///
    /// Fails with [`Error::NonFiniteTriangle`] when the area or perimeter is not
    /// finite (NaN coordinates, or magnitudes near `1e154` and above), and with
    /// [`Error::DegenerateTriangle`] for (near-)collinear input.
    pub fn with_cfg(a: Point2, b: Point2, c: Point2, cfg: GeomCfg) -> Result<Self> {
        let vertices = [a, b, c];
        // shoelace over A→B→C equals half the cross product of the two edges at A
        let signed_area = 0.5 * parallelogram_area(b - a, c - a);
        let area = signed_area.abs();
        let sides = [(c - b).norm(), (a - c).norm(), (b - a).norm()];
        let perimeter = sides.iter().sum::<f64>();
        if !(area.is_finite() && perimeter.is_finite()) {
            return Err(Error::NonFiniteTriangle { area, perimeter });
        }
        if !(area > cfg.eps_degenerate * perimeter * perimeter) {
            return Err(Error::DegenerateTriangle { area, perimeter });
        }
        let center = (a * sides[0] + b * sides[1] + c * sides[2]) / perimeter;
        let incircle = Circle::new(center, 2.0 * area / perimeter)?;
        let dist_to_incenter = vertices.map(|v| (center - v).norm());
        Ok(Self {
            vertices,
            sides,
            signed_area,
            perimeter,
            incircle,
            dist_to_incenter,
        })
    }

    #[inline]
    pub fn vertices(&self) -> [Point2; 3] {
        self.vertices
    }
    #[inline]
    pub fn vertex(&self, v: Vertex) -> Point2 {
        self.vertices[v.index()]
    }
    /// Length of the side opposite `v` (`a`, `b` or `c`).
    #[inline]
    pub fn side(&self, v: Vertex) -> f64 {
        self.sides[v.index()]
    }
    /// Positive when `A → B → C` runs counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }
    #[inline]
    pub fn incircle(&self) -> &Circle {
        &self.incircle
    }
    #[inline]
    pub fn incenter(&self) -> Point2 {
        self.incircle.center()
    }
    #[inline]
    pub fn dist_to_incenter(&self, v: Vertex) -> f64 {
        self.dist_to_incenter[v.index()]
    }

    /// Interior angle at `v` in radians (law of cosines, clamped to `[0, π]`).
    pub fn angle(&self, v: Vertex) -> f64 {
        let (u, w) = v.others();
        let (opp, s1, s2) = (self.side(v), self.side(u), self.side(w));
        let cos = (s1 * s1 + s2 * s2 - opp * opp) / (2.0 * s1 * s2);
        cos.clamp(-1.0, 1.0).acos()
    }
}
