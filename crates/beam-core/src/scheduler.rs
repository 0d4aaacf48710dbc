//! Beam scheduling: per-path progress advanced from frame timestamps.

use crate::constants::COMET_HALF_LENGTH;
use crate::geometry::Point;
use crate::path::{MeasuredPath, PathDescription};
use std::time::Duration;

/// Mutable progress of one beam.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamState {
    /// Position along the path as a fraction of its length, in `[0, 1)`.
    pub progress: f32,
    pub start_delay: Duration,
}

/// What the renderer needs to draw one beam this frame.
///
/// `tail` and `lead` sit [`COMET_HALF_LENGTH`] behind and ahead of `head`
/// along the path, clamped to its ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamFrame {
    pub index: usize,
    /// The start delay has not elapsed; the beam is pinned to the path start
    /// and should be drawn hidden.
    pub before_start: bool,
    pub progress: f32,
    pub head: Point,
    pub tail: Point,
    pub lead: Point,
}

impl BeamFrame {
    pub fn visible(&self) -> bool {
        !self.before_start
    }
}

pub struct BeamScheduler {
    speed: f32,
    beams: Vec<BeamState>,
    paths: Vec<Option<MeasuredPath>>,
    started_at: Option<Duration>,
    last_tick: Option<Duration>,
}

impl BeamScheduler {
    pub fn new(speed: f32, start_delays: Vec<Duration>) -> Self {
        let beams = start_delays
            .into_iter()
            .map(|start_delay| BeamState {
                progress: 0.0,
                start_delay,
            })
            .collect::<Vec<_>>();
        let paths = vec![None; beams.len()];
        Self {
            speed,
            beams,
            paths,
            started_at: None,
            last_tick: None,
        }
    }

    pub fn beams(&self) -> &[BeamState] {
        &self.beams
    }

    /// Replace every path and restart all beams from the path start.
    ///
    /// Paths that fail to parse or measure to zero length are kept as gaps and
    /// skipped on every frame until the next replacement.
    pub fn set_paths(&mut self, descriptions: &[PathDescription]) {
        self.paths = self
            .beams
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let desc = descriptions.get(i)?;
                match MeasuredPath::parse(desc) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        log::warn!("[beam] path {} unusable: {}", i, e);
                        None
                    }
                }
            })
            .collect();
        self.reset();
    }

    pub fn clear_paths(&mut self) {
        self.paths.iter_mut().for_each(|p| *p = None);
        self.reset();
    }

    pub fn reset(&mut self) {
        for b in &mut self.beams {
            b.progress = 0.0;
        }
        self.started_at = None;
        self.last_tick = None;
    }

    /// Length of path `index`, if it is usable.
    pub fn path_length(&self, index: usize) -> Option<f64> {
        self.paths.get(index)?.as_ref().map(MeasuredPath::length)
    }

    /// Advance every beam to the monotonic timestamp `now` and write one frame
    /// per drawable beam into `out`.
    ///
    /// The first call after a reset only establishes the time base.
    pub fn advance(&mut self, now: Duration, out: &mut Vec<BeamFrame>) {
        out.clear();
        let started_at = *self.started_at.get_or_insert(now);
        let since_start = now.saturating_sub(started_at);
        let dt = self
            .last_tick
            .map(|t| now.saturating_sub(t))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);

        for (i, (beam, path)) in self.beams.iter_mut().zip(&self.paths).enumerate() {
            let Some(path) = path else {
                continue;
            };
            let before_start = since_start < beam.start_delay;
            if !before_start {
                // Only the part of this frame after the delay elapsed counts.
                let moving = dt.min(since_start - beam.start_delay);
                beam.progress = wrap_progress(beam.progress + moving.as_secs_f32() * self.speed);
            }
            let s = beam.progress as f64 * path.length();
            let sampled = path.point_at_length(s).and_then(|head| {
                let tail = path.point_at_length(s - COMET_HALF_LENGTH)?;
                let lead = path.point_at_length(s + COMET_HALF_LENGTH)?;
                Ok((head, tail, lead))
            });
            match sampled {
                Ok((head, tail, lead)) => out.push(BeamFrame {
                    index: i,
                    before_start,
                    progress: beam.progress,
                    head,
                    tail,
                    lead,
                }),
                Err(e) => log::warn!("[beam] sampling path {} failed: {}", i, e),
            }
        }
    }
}

/// Wrap a progress value into `[0, 1)`.
#[inline]
pub fn wrap_progress(progress: f32) -> f32 {
    let wrapped = progress.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
