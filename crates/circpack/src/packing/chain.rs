//! Lazy per-vertex chain.
//!
//! Each step places the next circle on the segment from the current center to
//! the vertex, tangent to the current circle and to both sides meeting at the
//! vertex. With `r` the current radius and `d` the current center-to-vertex
//! distance, the next radius is `(r·d − r²) / (r + d)`.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::geom2::{Circle, Point2, Triangle, Vertex};

use super::types::PackCfg;

#[derive(Clone, Copy, Debug)]
enum Limit {
    Depth(usize),
    Threshold { floor: f64, max_steps: usize },
}

#[derive(Clone, Copy, Debug)]
enum StopReason {
    Depth,
    Threshold,
}

/// Iterator over the circles of one chain, largest first.
///
/// Finite and fused. Yields at most one `Err`, after which it is exhausted.
/// In threshold mode, reaching `max_steps` circles before the stopping radius
/// is an [`Error::StepCapExceeded`], never a silent end.
/// Restart by calling [`chain`] again; cloning resumes from the clone point.
#[derive(Clone, Debug)]
pub struct ChainIter {
    vertex: Vertex,
    target: Point2,
    current: Circle,
    remaining: f64,
    limit: Limit,
    step: usize,
    done: bool,
}

/// Chain of circles from the incircle of `tri` toward `vertex`.
///
/// Fails with [`Error::InvalidThreshold`] in threshold mode unless
/// `cfg.min_radius_frac` is finite and positive.
pub fn chain(tri: &Triangle, vertex: Vertex, cfg: PackCfg) -> Result<ChainIter> {
    let incircle = *tri.incircle();
    let limit = match cfg.depth {
        Some(n) => Limit::Depth(n),
        None => {
            let frac = cfg.min_radius_frac;
            if !(frac.is_finite() && frac > 0.0) {
                return Err(Error::InvalidThreshold(frac));
            }
            Limit::Threshold {
                floor: frac * incircle.radius(),
                max_steps: cfg.max_steps,
            }
        }
    };
    Ok(ChainIter {
        vertex,
        target: tri.vertex(vertex),
        current: incircle,
        remaining: tri.dist_to_incenter(vertex),
        limit,
        step: 0,
        done: false,
    })
}

impl ChainIter {
    #[inline]
    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    fn finish(&mut self, reason: StopReason) {
        self.done = true;
        tracing::debug!(vertex = %self.vertex, circles = self.step, ?reason, "chain complete");
    }

    fn overflow(&mut self) -> Error {
        self.done = true;
        Error::NumericOverflow {
            vertex: self.vertex,
            step: self.step + 1,
        }
    }
}

impl Iterator for ChainIter {
    type Item = Result<Circle>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let limit = self.limit;
        match limit {
            Limit::Depth(n) if self.step >= n => {
                self.finish(StopReason::Depth);
                return None;
            }
            Limit::Threshold { max_steps, .. } if self.step >= max_steps => {
                tracing::warn!(vertex = %self.vertex, max_steps, "chain hit step cap");
                self.done = true;
                return Some(Err(Error::StepCapExceeded {
                    vertex: self.vertex,
                    max_steps,
                }));
            }
            _ => {}
        }

        let r = self.current.radius();
        let d = self.remaining;
        let radius = (r * d - r * r) / (r + d);
        if !(radius.is_finite() && radius > 0.0) {
            return Some(Err(self.overflow()));
        }
        if let Limit::Threshold { floor, .. } = limit {
            if radius < floor {
                self.finish(StopReason::Threshold);
                return None;
            }
        }
        let from = self.current.center();
        let center = from + (self.target - from) * ((r + radius) / d);
        let remaining = (self.target - center).norm();
        // NaN fails the comparison too. A step that no longer gets closer to
        // the vertex means the coordinates ran out of precision.
        if !(remaining < d) {
            return Some(Err(self.overflow()));
        }
        let next = match Circle::new(center, radius) {
            Ok(c) => c,
            Err(_) => return Some(Err(self.overflow())),
        };
        self.step += 1;
        self.current = next;
        self.remaining = remaining;
        tracing::trace!(vertex = %self.vertex, step = self.step, radius, "chain circle");
        Some(Ok(next))
    }
}

impl FusedIterator for ChainIter {}
