use crate::geometry::Point;
use std::time::Duration;

/// Highlight state of one target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivationState {
    pub active: bool,
    /// Timestamp of the last frame a beam was within the touch threshold.
    pub last_touched: Option<Duration>,
}

/// Marks targets active while a beam is near them and for a cool-down window
/// after the last touch.
pub struct ProximityActivation {
    touch_threshold: f32,
    active_duration: Duration,
    states: Vec<ActivationState>,
}

impl ProximityActivation {
    pub fn new(target_count: usize, touch_threshold: f32, active_duration: Duration) -> Self {
        Self {
            touch_threshold,
            active_duration,
            states: vec![ActivationState::default(); target_count],
        }
    }

    pub fn states(&self) -> &[ActivationState] {
        &self.states
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.states.get(index).is_some_and(|s| s.active)
    }

    /// Clear every target. Returns true when any target was active.
    pub fn reset(&mut self) -> bool {
        let was_active = self.states.iter().any(|s| s.active);
        self.states.fill(ActivationState::default());
        was_active
    }

    /// Update every target from this frame's beam heads.
    ///
    /// Returns true when at least one target's `active` flag changed.
    pub fn update(&mut self, now: Duration, beam_heads: &[Point], targets: &[Point]) -> bool {
        if self.states.len() != targets.len() {
            self.states = vec![ActivationState::default(); targets.len()];
        }
        let mut changed = false;
        for (state, target) in self.states.iter_mut().zip(targets) {
            let touched = beam_heads
                .iter()
                .any(|head| head.distance(*target) <= self.touch_threshold);
            if touched {
                state.last_touched = Some(now);
            }
            let active = touched
                || state
                    .last_touched
                    .is_some_and(|t| now.saturating_sub(t) < self.active_duration);
            if active != state.active {
                state.active = active;
                changed = true;
            }
        }
        changed
    }
}
