use crate::core::engine::Engine;
use crate::error::EngineError;
use crate::Result;

use std::time::{Duration, Instant};

/// Frame deltas are capped here to avoid the spiral of death after a stall
const MAX_FRAME_TIME: f64 = 0.25;

/// Adaptive throttling never draws the physics rate below this
const MIN_FREQUENCY: f64 = 10.0;

/// What happened during one call to [`StepController::advance`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReport {
    /// Number of fixed steps that ran this frame
    pub steps: u32,

    /// Candidate pairs the broad phase produced, summed over the steps
    pub collision_checks: usize,

    /// Wall-clock time spent inside the engine, summed over the steps
    pub step_time: Duration,
}

/// Drives the engine at a fixed tick rate from variable frame times
///
/// The controller accumulates frame time and runs whole fixed steps out of
/// the accumulator. The remainder is exposed as the interpolation factor so
/// the renderer can draw between the previous and current tick. When
/// adaptive frequency is on, a step that cannot keep up lowers the physics
/// rate by 1 Hz, and a step with plenty of headroom raises it back toward
/// the configured rate.
pub struct StepController {
    engine: Engine,
    target_frequency: f64,
    active_frequency: f64,
    fixed_time_step: f64,
    accumulator: f64,
    simulation_time: f64,
    adaptive: bool,
}

impl StepController {
    /// Creates a controller stepping the engine at `frequency` Hz
    pub fn new(engine: Engine, frequency: f64) -> Result<Self> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "physics frequency must be positive, got {frequency}"
            )));
        }

        Ok(Self {
            engine,
            target_frequency: frequency,
            active_frequency: frequency,
            fixed_time_step: 1.0 / frequency,
            accumulator: 0.0,
            simulation_time: 0.0,
            adaptive: false,
        })
    }

    /// Enables adaptive throttling of the physics rate
    pub fn with_adaptive_frequency(mut self) -> Self {
        self.adaptive = true;
        self
    }

    /// Consumes one frame delta and runs as many fixed steps as it covers
    pub fn advance(&mut self, frame_time: f64) -> StepReport {
        let frame_time = frame_time.min(MAX_FRAME_TIME);
        self.accumulator += frame_time;

        let mut report = StepReport::default();

        while self.accumulator >= self.fixed_time_step {
            let started = Instant::now();
            self.simulation_time += self.fixed_time_step;
            report.collision_checks += self
                .engine
                .step(self.simulation_time, self.fixed_time_step);
            let step_time = started.elapsed();

            if self.adaptive {
                let step_seconds = step_time.as_secs_f64();

                if self.active_frequency > MIN_FREQUENCY && step_seconds > self.fixed_time_step {
                    // Draw down the physics resolution to keep the frame rate up
                    self.active_frequency -= 1.0;
                    self.fixed_time_step = 1.0 / self.active_frequency;
                } else if self.active_frequency < self.target_frequency
                    && step_seconds < self.fixed_time_step / 2.0
                {
                    self.active_frequency += 1.0;
                    self.fixed_time_step = 1.0 / self.active_frequency;
                }
            }

            report.step_time += step_time;
            report.steps += 1;
            self.accumulator -= self.fixed_time_step;
        }

        report
    }

    /// Fraction of a fixed step the accumulator still holds, in `[0, 1)`
    ///
    /// The renderer draws at `lerp(previous, current, factor)`.
    pub fn interpolation_factor(&self) -> f32 {
        (self.accumulator / self.fixed_time_step) as f32
    }

    /// Returns the physics rate currently in effect
    pub fn active_frequency(&self) -> f64 {
        self.active_frequency
    }

    /// Returns the accumulated simulation time in seconds
    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    /// Returns the engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the engine mutably, e.g. to update the world bounds
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}
