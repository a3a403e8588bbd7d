//! Vertex-directed fractal packing of a triangle.
//!
//! Purpose
//! - Starting from the incircle, grow one chain of mutually tangent circles
//!   toward each vertex. Each new circle touches its predecessor and the two
//!   sides meeting at that vertex.
//!
//! Termination
//! - Depth mode (`PackCfg::depth = Some(n)`): exactly `n` circles per chain.
//! - Threshold mode (`depth = None`): stop before the first circle whose radius
//!   falls below `min_radius_frac · incircle.radius`. Running past `max_steps`
//!   circles is an error.
//!
//! Only these three chains are produced; gaps between chain circles and the
//! sides are left empty.
//!
//! Code cross-refs: `geom2::{Triangle, Circle}`, `error::Error::NumericOverflow`.

mod chain;
mod types;

pub use chain::{chain, ChainIter};
pub use types::{Chain, PackCfg, Packing};

use crate::error::Result;
use crate::geom2::{Triangle, Vertex};

/// Pack `tri`: incircle plus the chains toward `A`, `B` and `C`.
///
/// Fails on the first chain that errors (overflow, step cap, invalid
/// threshold); no partial packing is returned.
pub fn pack(tri: &Triangle, cfg: PackCfg) -> Result<Packing> {
    let _span = tracing::debug_span!("pack", area = tri.area(), depth = ?cfg.depth).entered();
    let build = |v: Vertex| -> Result<Chain> {
        let circles = chain(tri, v, cfg)?.collect::<Result<Vec<_>>>()?;
        Ok(Chain::new(v, circles))
    };
    let chains = [build(Vertex::A)?, build(Vertex::B)?, build(Vertex::C)?];
    Ok(Packing::new(*tri.incircle(), chains))
}

/// Pack every triangle in order; stops at the first failure.
pub fn pack_all<'a, I>(triangles: I, cfg: PackCfg) -> Result<Vec<Packing>>
where
    I: IntoIterator<Item = &'a Triangle>,
{
    triangles.into_iter().map(|t| pack(t, cfg)).collect()
}

impl Triangle {
    /// Shorthand for [`pack`].
    #[inline]
    pub fn pack(&self, cfg: PackCfg) -> Result<Packing> {
        pack(self, cfg)
    }
}
