//! One diagram's beam engine: paths, scheduler and activation wired together.

use crate::activation::{ActivationState, ProximityActivation};
use crate::config::DiagramConfig;
use crate::geometry::{Point, PointSet};
use crate::path::{build_path, PathDescription};
use crate::sampler::Sample;
use crate::scheduler::{BeamFrame, BeamScheduler};
use smallvec::SmallVec;
use std::time::Duration;

/// Engine outputs for one animation frame, borrowed until the next call.
#[derive(Debug)]
pub struct Frame<'a> {
    pub beams: &'a [BeamFrame],
    pub activation: &'a [ActivationState],
    /// At least one target's `active` flag differs from the previous frame.
    pub activation_changed: bool,
}

/// What a measurement did to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    /// New geometry was adopted; path elements must be redrawn.
    pub paths_changed: bool,
    /// The engine holds valid geometry, so the frame loop should be running.
    pub animating: bool,
}

pub struct DiagramEngine {
    config: DiagramConfig,
    points: Option<PointSet>,
    paths: Vec<PathDescription>,
    scheduler: BeamScheduler,
    activation: ProximityActivation,
    beams: Vec<BeamFrame>,
    // A reset switched highlights off that the renderer has not seen yet.
    pending_activation_change: bool,
}

impl DiagramEngine {
    pub fn new(config: DiagramConfig) -> Self {
        let scheduler = BeamScheduler::new(config.speed, config.start_delays());
        let activation = ProximityActivation::new(
            config.target_count,
            config.touch_threshold,
            config.active_duration,
        );
        Self {
            config,
            points: None,
            paths: Vec::new(),
            scheduler,
            activation,
            beams: Vec::new(),
            pending_activation_change: false,
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn points(&self) -> Option<&PointSet> {
        self.points.as_ref()
    }

    pub fn paths(&self) -> &[PathDescription] {
        &self.paths
    }

    pub fn scheduler(&self) -> &BeamScheduler {
        &self.scheduler
    }

    pub fn is_ready(&self) -> bool {
        self.points.is_some()
    }

    /// Adopt new geometry: rebuild every path and restart all beams.
    pub fn apply_points(&mut self, points: PointSet) {
        let origin = points.origin();
        self.paths = points
            .targets()
            .iter()
            .map(|t| build_path(origin, *t, self.config.policy))
            .collect();
        self.scheduler.set_paths(&self.paths);
        self.reset_activation();
        self.beams.clear();
        log::debug!(
            "[{}] geometry updated: {} paths",
            self.config.name,
            self.paths.len()
        );
        self.points = Some(points);
    }

    /// Feed one sampler result into the engine.
    ///
    /// Unchanged and rejected samples keep the current geometry, which is
    /// still reported as animating so a stopped frame loop gets restarted.
    pub fn observe(&mut self, sample: Sample) -> Observed {
        let paths_changed = match sample {
            Sample::Updated(points) => {
                self.apply_points(points);
                true
            }
            Sample::Unchanged => false,
            Sample::Rejected(e) => {
                log::debug!("[{}] measurement skipped: {}", self.config.name, e);
                false
            }
        };
        Observed {
            paths_changed,
            animating: self.is_ready(),
        }
    }

    /// Drop the current geometry; `frame` returns `None` until new points arrive.
    pub fn clear(&mut self) {
        self.points = None;
        self.paths.clear();
        self.scheduler.clear_paths();
        self.reset_activation();
        self.beams.clear();
    }

    fn reset_activation(&mut self) {
        if self.activation.reset() {
            self.pending_activation_change = true;
        }
    }

    /// Advance beams to `now`, then derive activation from the new positions.
    pub fn frame(&mut self, now: Duration) -> Option<Frame<'_>> {
        let points = self.points.as_ref()?;
        self.scheduler.advance(now, &mut self.beams);
        let heads: SmallVec<[Point; 16]> = self
            .beams
            .iter()
            .filter(|b| b.visible())
            .map(|b| b.head)
            .collect();
        let activation_changed = self.activation.update(now, &heads, points.targets())
            | std::mem::take(&mut self.pending_activation_change);
        Some(Frame {
            beams: &self.beams,
            activation: self.activation.states(),
            activation_changed,
        })
    }
}
