//! Fractal circle packing inside triangles.
//!
//! A triangle's incircle is the seed; from it one chain of mutually tangent,
//! shrinking circles grows toward each vertex. The circles discretize a
//! block-in-matrix material as an assembly of inscribed particles.
//!
//! Layout
//! - `geom2`: `Circle`, `Triangle`, Descartes tangency, random triangles.
//! - `packing`: per-vertex chains (`chain`) and whole-triangle packings (`pack`).
//! - `error`: the typed failures shared by both.
//!
//! Logging goes through `tracing`; install a subscriber to see chain events.

pub mod error;
pub mod geom2;
pub mod packing;

pub use error::{Error, Result};
pub use geom2::{Circle, GeomCfg, Point2, Triangle, Vertex};
pub use packing::{pack, pack_all, Chain, PackCfg, Packing};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_triangle, ReplayToken, TriangleCfg};
    pub use crate::geom2::{Circle, GeomCfg, Point2, Triangle, Vertex};
    pub use crate::packing::{chain, pack, pack_all, Chain, ChainIter, PackCfg, Packing};
    pub use crate::{Error, Result};
}
