//! Position sampling: turns element bounding boxes into a [`PointSet`].

use crate::constants::POSITION_TOLERANCE;
use crate::error::GeometryError;
use crate::geometry::{Point, PointSet};
use kurbo::Rect;

/// Which point of a target's measured box is used as its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Centre of the target element.
    Center,
    /// Horizontal centre and top edge of the target's inner marker element.
    MarkerTop,
}

/// Bounding boxes in a shared (viewport) coordinate space.
pub trait LayoutSource {
    fn container_rect(&self) -> Option<Rect>;
    fn origin_rect(&self) -> Option<Rect>;
    /// One entry per target in order; `None` when the target (or its marker)
    /// cannot be measured.
    fn target_rects(&self) -> Vec<Option<Rect>>;
}

/// Result of one sampling pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Sample {
    /// Same layout as last time, within tolerance.
    Unchanged,
    /// New geometry; downstream paths and beam progress must be rebuilt.
    Updated(PointSet),
    /// Measurement discarded; the previous valid set (if any) stays current.
    Rejected(GeometryError),
}

pub struct PositionSampler {
    expected: usize,
    anchor: Anchor,
    tolerance: f32,
    last: Option<PointSet>,
}

impl PositionSampler {
    pub fn new(expected: usize, anchor: Anchor) -> Self {
        Self {
            expected,
            anchor,
            tolerance: POSITION_TOLERANCE,
            last: None,
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn current(&self) -> Option<&PointSet> {
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn sample(&mut self, layout: &impl LayoutSource) -> Sample {
        match self.measure(layout) {
            Ok(points) => {
                if let Some(prev) = &self.last {
                    if prev.approx_eq(&points, self.tolerance) {
                        return Sample::Unchanged;
                    }
                }
                self.last = Some(points.clone());
                Sample::Updated(points)
            }
            Err(e) => Sample::Rejected(e),
        }
    }

    fn measure(&self, layout: &impl LayoutSource) -> Result<PointSet, GeometryError> {
        let container = layout
            .container_rect()
            .filter(is_laid_out)
            .ok_or(GeometryError::NotLaidOut)?;
        let origin = layout
            .origin_rect()
            .filter(is_laid_out)
            .ok_or(GeometryError::NotLaidOut)?;
        let rects = layout.target_rects();
        let found = rects.len();
        let targets: Vec<Point> = rects
            .into_iter()
            .flatten()
            .filter(is_laid_out)
            .map(|r| relative(anchor_point(&r, self.anchor), &container))
            .collect();
        if targets.len() != found {
            return Err(GeometryError::Incomplete {
                expected: self.expected,
                found: targets.len(),
            });
        }
        PointSet::new(
            relative(anchor_point(&origin, Anchor::Center), &container),
            targets,
            self.expected,
        )
    }
}

fn is_laid_out(r: &Rect) -> bool {
    r.width() > 0.0 && r.height() > 0.0
}

fn anchor_point(r: &Rect, anchor: Anchor) -> kurbo::Point {
    match anchor {
        Anchor::Center => r.center(),
        Anchor::MarkerTop => kurbo::Point::new(r.center().x, r.y0),
    }
}

fn relative(p: kurbo::Point, container: &Rect) -> Point {
    Point::new((p.x - container.x0) as f32, (p.y - container.y0) as f32)
}
