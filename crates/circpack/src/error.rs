//! Error type shared by the geometry and packing modules.

use thiserror::Error;

use crate::geom2::Vertex;

/// Result alias for fallible geometry and packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed failures of circle construction, tangency solving and packing.
///
/// Every variant is raised where the offending value is computed; nothing is
/// clamped or replaced by a default.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A circle was requested with a radius that is not finite and positive.
    #[error("invalid radius {0}: expected a finite value > 0")]
    InvalidRadius(f64),

    /// The triangle has (near-)zero area, so its incircle is undefined.
    #[error("degenerate triangle: area {area:e} with perimeter {perimeter:e}")]
    DegenerateTriangle { area: f64, perimeter: f64 },

    /// Coordinates too large (or NaN) for the area or perimeter to be finite.
    #[error("non-finite triangle: area {area:e} with perimeter {perimeter:e}")]
    NonFiniteTriangle { area: f64, perimeter: f64 },

    /// The chord construction for a tangent circle has no real solution.
    #[error("no real tangency: half-chord radicand {radicand:e} < 0")]
    NoRealTangency { radicand: f64 },

    /// A chain produced a non-finite or non-positive value.
    #[error("numeric overflow in chain {vertex} at step {step}")]
    NumericOverflow { vertex: Vertex, step: usize },

    /// A threshold-mode chain was still above its stopping radius after `max_steps` circles.
    #[error("chain {vertex} did not reach its stopping radius within {max_steps} steps")]
    StepCapExceeded { vertex: Vertex, max_steps: usize },

    /// Threshold mode needs a finite, positive `min_radius_frac`.
    #[error("invalid threshold fraction {0}: expected a finite value > 0")]
    InvalidThreshold(f64),
}
