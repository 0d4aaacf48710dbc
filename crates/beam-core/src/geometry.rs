//! Points and validated point sets in container-local space.

use crate::error::GeometryError;
use glam::Vec2;

/// Container-local coordinate (same units as the rendering surface).
pub type Point = Vec2;

/// One origin and exactly `expected` targets, all finite.
///
/// Construction fails instead of producing a partially populated set, so a
/// diagram never draws beams from stale or default coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    origin: Point,
    targets: Vec<Point>,
}

impl PointSet {
    pub fn new(origin: Point, targets: Vec<Point>, expected: usize) -> Result<Self, GeometryError> {
        if targets.len() != expected {
            return Err(GeometryError::Incomplete {
                expected,
                found: targets.len(),
            });
        }
        if !origin.is_finite() {
            return Err(GeometryError::NonFiniteOrigin);
        }
        if let Some(index) = targets.iter().position(|t| !t.is_finite()) {
            return Err(GeometryError::NonFiniteTarget { index });
        }
        Ok(Self { origin, targets })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn targets(&self) -> &[Point] {
        &self.targets
    }

    /// True when every coordinate is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &PointSet, tolerance: f32) -> bool {
        self.targets.len() == other.targets.len()
            && self.origin.abs_diff_eq(other.origin, tolerance)
            && self
                .targets
                .iter()
                .zip(&other.targets)
                .all(|(a, b)| a.abs_diff_eq(*b, tolerance))
    }
}

#[inline]
pub fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x as f64, p.y as f64)
}

#[inline]
pub fn from_kurbo(p: kurbo::Point) -> Point {
    Point::new(p.x as f32, p.y as f32)
}
