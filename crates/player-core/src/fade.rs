use crate::constants::{FADE_IN_CEILING, FADE_STEPS};
use crate::easing::{fade_in_volume, fade_out_volume};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Ramp tuning. Defaults mirror the constants in `constants.rs`.
#[derive(Clone, Debug)]
pub struct FadeConfig {
    pub steps: u32,
    pub ceiling: f32,
    /// Fade length when switching tracks while playing.
    pub crossfade: Duration,
    /// Fade-in length when starting from silence.
    pub first_play: Duration,
    /// Fade-in length when resuming a paused track.
    pub resume: Duration,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            steps: FADE_STEPS,
            ceiling: FADE_IN_CEILING,
            crossfade: crate::constants::crossfade_duration(),
            first_play: crate::constants::first_play_fade_duration(),
            resume: crate::constants::first_play_fade_duration(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeDirection {
    In { ceiling: f32 },
    Out { from: f32 },
}

/// Shared cancel flag for an in-flight ramp.
#[derive(Clone, Debug, Default)]
pub struct FadeHandle {
    cancelled: Rc<Cell<bool>>,
}

impl FadeHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Stepwise volume ramp. Step `k` of `steps` fires after `k * duration / steps`
/// and applies the eased value at progress `k / steps`, so the last step lands
/// exactly on the target.
#[derive(Debug)]
pub struct VolumeRamp {
    direction: FadeDirection,
    steps: u32,
    step: u32,
    interval: Duration,
    elapsed: Duration,
    handle: FadeHandle,
}

impl VolumeRamp {
    pub fn new(direction: FadeDirection, duration: Duration, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            direction,
            steps,
            step: 0,
            interval: duration / steps,
            elapsed: Duration::ZERO,
            handle: FadeHandle::default(),
        }
    }

    pub fn fade_in(duration: Duration, steps: u32, ceiling: f32) -> Self {
        Self::new(FadeDirection::In { ceiling }, duration, steps)
    }

    pub fn fade_out(from: f32, duration: Duration, steps: u32) -> Self {
        Self::new(FadeDirection::Out { from }, duration, steps)
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    pub fn handle(&self) -> FadeHandle {
        self.handle.clone()
    }

    pub fn steps_taken(&self) -> u32 {
        self.step
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps || self.is_cancelled()
    }

    /// Volume after `step` steps.
    pub fn volume_at(&self, step: u32) -> f32 {
        let progress = step.min(self.steps) as f32 / self.steps as f32;
        match self.direction {
            FadeDirection::In { ceiling } => fade_in_volume(ceiling, progress),
            FadeDirection::Out { from } => fade_out_volume(from, progress),
        }
    }

    /// Advance by `dt`, firing every step whose time has come.
    /// Returns the volume of the last step fired, if any.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if self.is_finished() {
            return None;
        }
        self.elapsed += dt;
        let mut latest = None;
        while self.step < self.steps && self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.step += 1;
            latest = Some(self.volume_at(self.step));
        }
        latest
    }
}
