//! Circle value type with eagerly derived scalars.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::types::Point2;
use crate::error::{Error, Result};

/// A circle in the plane.
///
/// Invariants:
/// - `radius` is finite and `> 0`.
/// - `curvature`, `diameter`, `area` and `perimeter` are derived from `radius`
///   once, in [`Circle::new`], and never change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Circle {
    center: Point2,
    radius: f64,
    curvature: f64,
    diameter: f64,
    area: f64,
    perimeter: f64,
}

impl Circle {
    /// Build a circle; fails with [`Error::InvalidRadius`] unless `radius` is finite and positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            curvature: 1.0 / radius,
            diameter: 2.0 * radius,
            area: PI * radius * radius,
            perimeter: 2.0 * PI * radius,
        })
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn curvature(&self) -> f64 {
        self.curvature
    }
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Gap between the two boundaries; zero for externally tangent circles,
    /// negative when they overlap.
    #[inline]
    pub fn gap_to(&self, other: &Circle) -> f64 {
        (other.center - self.center).norm() - (self.radius + other.radius)
    }
}
