//! Fixed-step frame clock
//!
//! Front ends measure a variable frame time and feed it to [`FixedTimestep`],
//! which hands back how many fixed physics steps to run this frame. The
//! physics step never changes with the display rate.

use log::warn;

/// Accumulator that converts variable frame times into whole physics steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
    speed: f64,
    paused: bool,
    /// Frame times above this are clamped before accumulation
    pub max_frame_time: Option<f64>,
}

impl FixedTimestep {
    pub fn new(step: f64) -> Self {
        Self {
            step,
            accumulator: 0.0,
            speed: 1.0,
            paused: false,
            max_frame_time: None,
        }
    }

    pub fn with_max_frame_time(mut self, max_frame_time: f64) -> Self {
        self.max_frame_time = Some(max_frame_time);
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// The fixed step handed to the simulation on every tick
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Simulation speed multiplier applied to incoming frame times
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Drop any pending time, e.g. after a scenario reset
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Accumulate one frame and return the number of fixed steps to run.
    ///
    /// While paused nothing accumulates and zero steps are returned.
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        if self.paused || self.step <= 0.0 {
            return 0;
        }

        let mut frame_time = frame_time.max(0.0);
        if let Some(max) = self.max_frame_time {
            if frame_time > max {
                warn!("frame took {frame_time:.4}s, clamping to {max:.4}s");
                frame_time = max;
            }
        }

        self.accumulator += frame_time * self.speed;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Leftover fraction of a step, in [0, 1), for render interpolation
    pub fn alpha(&self) -> f64 {
        if self.step <= 0.0 {
            return 0.0;
        }
        self.accumulator / self.step
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(crate::constants::PHYSICS_DT)
    }
}
