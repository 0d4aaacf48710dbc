use crate::constants::*;
use crate::path::PathPolicy;
use crate::sampler::Anchor;
use std::time::Duration;

/// Per-diagram parameters for the beam engine.
///
/// Fields:
/// - `name`: value of the page's `data-beam-diagram` attribute
/// - `target_count`: targets a measurement must produce to be accepted
/// - `policy`: how origin and target are connected
/// - `anchor`: which point of a target's box is its position
/// - `speed`: path fraction travelled per second
/// - `start_stagger`: start delay added per path index
/// - `touch_threshold`: distance at which a beam activates a target
/// - `active_duration`: cool-down after the last touch
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramConfig {
    pub name: &'static str,
    pub target_count: usize,
    pub policy: PathPolicy,
    pub anchor: Anchor,
    pub speed: f32,
    pub start_stagger: Duration,
    pub touch_threshold: f32,
    pub active_duration: Duration,
}

impl DiagramConfig {
    /// Central logo feeding four service cards along L-shaped connectors.
    pub fn services() -> Self {
        Self {
            name: "services",
            target_count: SERVICES_TARGET_COUNT,
            policy: PathPolicy::OrthogonalRounded,
            anchor: Anchor::MarkerTop,
            speed: BEAM_SPEED,
            start_stagger: SERVICES_START_STAGGER,
            touch_threshold: TOUCH_THRESHOLD,
            active_duration: SERVICES_ACTIVE_DURATION,
        }
    }

    /// Central logo radiating straight beams to thirteen integrations.
    pub fn solvyn() -> Self {
        Self {
            name: "solvyn",
            target_count: SOLVYN_TARGET_COUNT,
            policy: PathPolicy::Linear,
            anchor: Anchor::Center,
            speed: BEAM_SPEED,
            start_stagger: SOLVYN_START_STAGGER,
            touch_threshold: TOUCH_THRESHOLD,
            active_duration: SOLVYN_ACTIVE_DURATION,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "services" => Some(Self::services()),
            "solvyn" => Some(Self::solvyn()),
            _ => None,
        }
    }

    pub fn start_delay(&self, index: usize) -> Duration {
        self.start_stagger * index as u32
    }

    pub fn start_delays(&self) -> Vec<Duration> {
        (0..self.target_count).map(|i| self.start_delay(i)).collect()
    }
}
