use crate::error::EngineError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the disk simulation
///
/// Lengths are expressed in world units: the container half-height is 1 at
/// startup, so a radius configured in pixels must be divided by the initial
/// window height before it gets here.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// The smallest radius the spawner may pick
    pub min_radius: f32,

    /// The largest radius the spawner may pick; also fixes the broad-phase cell size
    pub max_radius: f32,

    /// Hard upper bound on the number of live disks
    pub spawn_limit: usize,

    /// Downward gravity applied to every movable disk
    pub gravity: f32,

    /// Coefficient of restitution in [0, 1]; 1 is perfectly elastic
    pub restitution: f32,

    /// Aspect ratio of the viewport at startup, drives the horizontal spawn range
    pub initial_aspect_ratio: f32,

    /// Viewport height at startup in pixels, used for the outline width hint
    pub initial_window_height: f32,

    /// Disks spawned per simulation second; 0 spawns up to the limit immediately
    pub spawn_rate: f32,

    /// Number of positional correction iterations per tick
    pub correction_iterations: u32,
}

impl EngineConfig {
    /// Checks the configuration for values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.min_radius <= 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "min_radius must be positive, got {}",
                self.min_radius
            )));
        }

        if self.max_radius < self.min_radius {
            return Err(EngineError::InvalidParameter(format!(
                "max_radius ({}) must not be smaller than min_radius ({})",
                self.max_radius, self.min_radius
            )));
        }

        if self.spawn_limit == 0 {
            return Err(EngineError::InvalidParameter(
                "spawn_limit must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(EngineError::InvalidParameter(format!(
                "restitution must lie in [0, 1], got {}",
                self.restitution
            )));
        }

        if self.initial_aspect_ratio <= 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "initial_aspect_ratio must be positive, got {}",
                self.initial_aspect_ratio
            )));
        }

        if self.initial_window_height <= 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "initial_window_height must be positive, got {}",
                self.initial_window_height
            )));
        }

        if self.spawn_rate < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "spawn_rate must not be negative, got {}",
                self.spawn_rate
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        // 10..30 pixel radii in a 1920x1080 window, normalised by the window height
        Self {
            min_radius: 10.0 / 1080.0,
            max_radius: 30.0 / 1080.0,
            spawn_limit: 100_000,
            gravity: 98.1,
            restitution: 0.9,
            initial_aspect_ratio: 1920.0 / 1080.0,
            initial_window_height: 1080.0,
            spawn_rate: 0.0,
            correction_iterations: 4,
        }
    }
}
