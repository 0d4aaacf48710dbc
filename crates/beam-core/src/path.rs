//! Path building between an origin and a target, and arc-length sampling.

use crate::constants::{CORNER_RADIUS, PATH_ACCURACY};
use crate::error::PathError;
use crate::geometry::{from_kurbo, Point};
use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg};
use std::fmt;

/// How a path connects its two end points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPolicy {
    /// Straight line from origin to target.
    Linear,
    /// Horizontal run, then vertical run, joined by a rounded corner of
    /// [`CORNER_RADIUS`]. Degrades to a straight line when either span is
    /// too short to fit the corner.
    OrthogonalRounded,
}

/// SVG path data (`d` attribute) connecting two points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathDescription(String);

impl PathDescription {
    pub fn from_svg(data: impl Into<String>) -> Self {
        Self(data.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the path is a single straight segment.
    pub fn is_straight(&self) -> bool {
        !self.0.contains('Q')
    }
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn build_path(origin: Point, target: Point, policy: PathPolicy) -> PathDescription {
    match policy {
        PathPolicy::Linear => straight(origin, target),
        PathPolicy::OrthogonalRounded => {
            let dx = target.x - origin.x;
            let dy = target.y - origin.y;
            let r = CORNER_RADIUS;
            if dx.abs() <= 2.0 * r || dy.abs() <= 2.0 * r {
                return straight(origin, target);
            }
            let sx = dx.signum();
            let sy = dy.signum();
            PathDescription(format!(
                "M {} {} L {} {} Q {} {} {} {} L {} {}",
                origin.x,
                origin.y,
                target.x - sx * r,
                origin.y,
                target.x,
                origin.y,
                target.x,
                origin.y + sy * r,
                target.x,
                target.y
            ))
        }
    }
}

fn straight(origin: Point, target: Point) -> PathDescription {
    PathDescription(format!(
        "M {} {} L {} {}",
        origin.x, origin.y, target.x, target.y
    ))
}

/// A parsed path with its segment lengths measured once.
#[derive(Clone, Debug)]
pub struct MeasuredPath {
    segments: Vec<(PathSeg, f64)>,
    length: f64,
}

impl MeasuredPath {
    pub fn parse(description: &PathDescription) -> Result<Self, PathError> {
        let bez = BezPath::from_svg(description.as_str())
            .map_err(|e| PathError::Malformed(e.to_string()))?;
        let segments: Vec<(PathSeg, f64)> = bez
            .segments()
            .map(|seg| (seg, seg.arclen(PATH_ACCURACY)))
            .collect();
        let length: f64 = segments.iter().map(|(_, len)| len).sum();
        if !length.is_finite() || length <= 0.0 {
            return Err(PathError::ZeroLength);
        }
        Ok(Self { segments, length })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Point at arc length `s` from the start; `s` is clamped to the path.
    pub fn point_at_length(&self, s: f64) -> Result<Point, PathError> {
        if !s.is_finite() {
            return Err(PathError::OutOfRange(s));
        }
        let mut remaining = s.clamp(0.0, self.length);
        for (seg, len) in &self.segments {
            if remaining <= *len {
                let t = if *len > 0.0 {
                    seg.inv_arclen(remaining, PATH_ACCURACY)
                } else {
                    0.0
                };
                return Ok(from_kurbo(seg.eval(t)));
            }
            remaining -= len;
        }
        // Rounding can leave a sliver past the last segment.
        self.segments
            .last()
            .map(|(seg, _)| from_kurbo(seg.eval(1.0)))
            .ok_or(PathError::ZeroLength)
    }

    /// Point at `fraction` of the total length.
    pub fn point_at_fraction(&self, fraction: f32) -> Result<Point, PathError> {
        self.point_at_length(fraction as f64 * self.length)
    }
}
