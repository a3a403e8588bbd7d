//! Basic 2D types and tolerances shared by circles and triangles.
//!
//! - `Point2`: plain coordinate pair (nalgebra column vector).
//! - `GeomCfg`: centralizes the degeneracy epsilon for triangles.
//! - `Vertex`: the canonical `A`, `B`, `C` labels.

use std::fmt;

use nalgebra::Vector2;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A point (or displacement) in the plane.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// A triangle is degenerate when `area <= eps_degenerate * perimeter²`.
    /// Relative to the perimeter so that the test does not depend on scale.
    pub eps_degenerate: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_degenerate: 1e-12,
        }
    }
}

/// Vertex label of a triangle `ABC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    /// All labels in canonical order.
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }

    /// The other two labels, in cyclic order after `self`.
    #[inline]
    pub fn others(self) -> (Vertex, Vertex) {
        match self {
            Vertex::A => (Vertex::B, Vertex::C),
            Vertex::B => (Vertex::C, Vertex::A),
            Vertex::C => (Vertex::A, Vertex::B),
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        };
        f.write_str(s)
    }
}
