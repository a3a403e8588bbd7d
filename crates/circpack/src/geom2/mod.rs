//! 2D geometry: circles, Descartes tangency, triangles with incircles.
//!
//! Purpose
//! - Provide immutable value types (`Circle`, `Triangle`) whose derived
//!   quantities are computed once in the constructor.
//! - Solve for circles tangent to known ones (`Circle::tangent_to_pair`,
//!   `Circle::tangent_to_triple`).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Point2`).
//! - Constructors validate and return `Result`; a value that exists is valid.

mod circle;
pub mod descartes;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use circle::Circle;
pub use triangle::Triangle;
pub use types::{GeomCfg, Point2, Vertex};
pub use util::{parallelogram_area, point_line_distance};
