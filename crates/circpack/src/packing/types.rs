//! Configuration and output types of the packer.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::geom2::{Circle, Vertex};

/// Packing configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackCfg {
    /// Fixed number of circles per vertex chain. `None` selects threshold mode;
    /// `Some(0)` yields empty chains.
    pub depth: Option<usize>,
    /// Threshold mode stops before the first circle whose radius is below
    /// `min_radius_frac · incircle.radius`. Must be finite and `> 0`.
    pub min_radius_frac: f64,
    /// Threshold mode only: hard cap on circles per chain. Exceeding it is
    /// [`Error::StepCapExceeded`](crate::Error::StepCapExceeded).
    pub max_steps: usize,
}

impl Default for PackCfg {
    fn default() -> Self {
        Self {
            depth: None,
            min_radius_frac: 0.05,
            max_steps: 10_000,
        }
    }
}

impl PackCfg {
    /// Depth mode with `depth` circles per chain.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// Threshold mode with a custom fraction of the incircle radius.
    pub fn with_threshold(min_radius_frac: f64) -> Self {
        Self {
            min_radius_frac,
            ..Self::default()
        }
    }
}

/// Circles from the incircle toward one vertex, largest first.
/// The incircle itself is not part of the chain.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Chain {
    vertex: Vertex,
    circles: Vec<Circle>,
}

impl Chain {
    pub(crate) fn new(vertex: Vertex, circles: Vec<Circle>) -> Self {
        Self { vertex, circles }
    }

    #[inline]
    pub fn vertex(&self) -> Vertex {
        self.vertex
    }
    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
    #[inline]
    pub fn last(&self) -> Option<&Circle> {
        self.circles.last()
    }
}

/// Full packing of one triangle: the incircle plus one chain per vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Packing {
    incircle: Circle,
    chains: [Chain; 3],
}

impl Packing {
    pub(crate) fn new(incircle: Circle, chains: [Chain; 3]) -> Self {
        Self { incircle, chains }
    }

    #[inline]
    pub fn incircle(&self) -> &Circle {
        &self.incircle
    }
    /// Chains in `A, B, C` order.
    #[inline]
    pub fn chains(&self) -> &[Chain; 3] {
        &self.chains
    }
    #[inline]
    pub fn chain(&self, v: Vertex) -> &Chain {
        &self.chains[v.index()]
    }

    /// Incircle first, then the chains of `A`, `B` and `C`.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        std::iter::once(&self.incircle).chain(self.chains.iter().flat_map(|c| c.circles.iter()))
    }

    /// Number of circles including the incircle.
    pub fn num_circles(&self) -> usize {
        1 + self.chains.iter().map(Chain::len).sum::<usize>()
    }

    /// Summed circle area over triangle area.
    pub fn fill_ratio(&self, triangle_area: f64) -> f64 {
        self.circles().map(Circle::area).sum::<f64>() / triangle_area
    }
}
