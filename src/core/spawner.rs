use crate::core::store::{Disk, DiskStore};
use crate::core::EngineConfig;
use crate::math::Vector2;

use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

/// Introduces new disks over simulation time
///
/// The spawner owns the engine's only random source. Radii, velocities and
/// colors are drawn uniformly; the spawn position depends on gravity: with
/// gravity on, disks drop in from the ceiling so they have somewhere to go,
/// otherwise they appear anywhere in the container.
pub struct Spawner {
    min_radius: f32,
    max_radius: f32,
    spawn_limit: usize,
    spawn_rate: f32,
    spawn_half_width: f32,
    drop_from_ceiling: bool,
    initial_window_height: f32,
    rng: ChaCha8Rng,
}

impl Spawner {
    /// Creates a spawner with a non-deterministic seed
    pub fn new(config: &EngineConfig) -> Self {
        Self::from_rng(config, ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Creates a spawner with a fixed seed, for reproducible runs
    pub fn with_seed(config: &EngineConfig, seed: u64) -> Self {
        Self::from_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(config: &EngineConfig, rng: ChaCha8Rng) -> Self {
        Self {
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            spawn_limit: config.spawn_limit,
            spawn_rate: config.spawn_rate,
            spawn_half_width: config.initial_aspect_ratio * 0.9,
            drop_from_ceiling: config.gravity > 0.0,
            initial_window_height: config.initial_window_height,
            rng,
        }
    }

    /// Number of disks that should exist at the given simulation time
    pub fn target_count(&self, simulation_time: f64) -> usize {
        if self.spawn_rate > 0.0 {
            ((self.spawn_rate as f64 * simulation_time) as usize).min(self.spawn_limit)
        } else {
            self.spawn_limit
        }
    }

    /// Appends disks until the store reaches the current target count
    pub fn spawn(&mut self, store: &mut DiskStore, simulation_time: f64) {
        let target = self.target_count(simulation_time);

        while store.len() < target {
            let radius = self.rng.random_range(self.min_radius..=self.max_radius);

            let x = self
                .rng
                .random_range(-self.spawn_half_width..=self.spawn_half_width);
            let y = if self.drop_from_ceiling {
                1.0
            } else {
                self.rng.random_range(-0.9..=0.9)
            };

            let velocity = Vector2::new(
                self.rng.random_range(-1.0..=1.0),
                self.rng.random_range(-1.0..=1.0),
            );

            let disk = Disk::new(Vector2::new(x, y), radius)
                .with_velocity(velocity)
                .with_color(
                    self.rng.random_range(0.4..=1.0),
                    self.rng.random_range(0.4..=1.0),
                    self.rng.random_range(0.4..=1.0),
                );

            let outline_width = 2.0 / radius / self.initial_window_height;
            store.push(&disk, outline_width);
        }
    }
}
