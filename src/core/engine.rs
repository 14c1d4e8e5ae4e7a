use crate::collision::{narrow_phase, solver, BroadPhase, BruteForceBroadPhase, Contact, GridBroadPhase};
use crate::core::spawner::Spawner;
use crate::core::store::{Disk, DiskSnapshot, DiskStore};
use crate::core::{EngineConfig, WorldBounds};
use crate::dynamics::{integrator, walls};
use crate::error::EngineError;
use crate::Result;

/// Below this many candidate pairs the narrow phase runs on the main thread;
/// dispatch overhead would otherwise dominate the work
#[cfg(feature = "parallel")]
const PARALLEL_CUTOFF: usize = 5000;

/// The physics engine driving one disk simulation
///
/// Owns the disk store, the spawner, the broad phase and the narrow-phase
/// worker pool. Each call to [`step`](Engine::step) runs one full fixed tick:
/// spawn, integrate, wall resolution, collision detection and the impulse and
/// positional-correction solver. The engine holds no global state and is a
/// plain value: dropping it joins the worker pool.
pub struct Engine {
    config: EngineConfig,
    store: DiskStore,
    spawner: Spawner,
    broad_phase: Box<dyn BroadPhase>,
    bounds: WorldBounds,
    cell_size: f32,
    pairs: Vec<(u32, u32)>,
    contact_buffers: Vec<Vec<Contact>>,
    use_spatial_partitioning: bool,
    single_threaded: bool,
    #[cfg(feature = "parallel")]
    pool: rayon::ThreadPool,
}

impl Engine {
    /// Creates an engine with a non-deterministically seeded spawner
    pub fn new(config: EngineConfig) -> Result<Self> {
        let spawner = Spawner::new(&config);
        Self::build(config, spawner)
    }

    /// Creates an engine with a fixed spawner seed, for reproducible runs
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self> {
        let spawner = Spawner::with_seed(&config, seed);
        Self::build(config, spawner)
    }

    fn build(config: EngineConfig, spawner: Spawner) -> Result<Self> {
        config.validate()?;

        // Leave one core for the thread driving the simulation
        #[cfg(feature = "parallel")]
        let worker_count = num_cpus::get().saturating_sub(1).max(1);
        #[cfg(not(feature = "parallel"))]
        let worker_count = 1;

        #[cfg(feature = "parallel")]
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .build()
            .map_err(|error| EngineError::InternalError(error.to_string()))?;

        let mut contact_buffers = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            contact_buffers.push(Vec::with_capacity(config.spawn_limit));
        }

        // Max disk diameter as the cell size so only adjacent cells need searching
        let cell_size = config.max_radius * 2.0;
        let bounds = WorldBounds::new(config.initial_aspect_ratio, 1.0);

        Ok(Self {
            store: DiskStore::with_capacity(config.spawn_limit),
            spawner,
            broad_phase: Box::new(GridBroadPhase::new(bounds.x, bounds.y, cell_size)),
            bounds,
            cell_size,
            pairs: Vec::new(),
            contact_buffers,
            use_spatial_partitioning: true,
            single_threaded: false,
            #[cfg(feature = "parallel")]
            pool,
            config,
        })
    }

    /// Updates the container half-extents; called by the host before each
    /// step so the world tracks the viewport
    pub fn set_world_bounds(&mut self, bound_x: f32, bound_y: f32) {
        self.bounds = WorldBounds::new(bound_x, bound_y);
    }

    /// Returns the current container half-extents
    pub fn world_bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of live disks
    pub fn disk_count(&self) -> usize {
        self.store.len()
    }

    /// Borrows every store column for the renderer
    pub fn snapshot(&self) -> DiskSnapshot<'_> {
        self.store.snapshot()
    }

    /// Appends a disk outside the spawner, e.g. to set up a scenario
    pub fn add_disk(&mut self, disk: Disk) -> Result<usize> {
        if disk.radius <= 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "disk radius must be positive, got {}",
                disk.radius
            )));
        }

        if disk.inverse_mass < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "disk inverse mass must not be negative, got {}",
                disk.inverse_mass
            )));
        }

        if self.store.len() >= self.config.spawn_limit {
            return Err(EngineError::SpawnLimitReached(self.config.spawn_limit));
        }

        let outline_width = 2.0 / disk.radius / self.config.initial_window_height;
        Ok(self.store.push(&disk, outline_width))
    }

    /// Switches between the uniform-grid and the brute-force broad phase
    ///
    /// A benchmarking toggle: the physical results are identical up to the
    /// floating-point order in which pairs are discovered.
    pub fn set_use_spatial_partitioning(&mut self, enabled: bool) {
        if enabled == self.use_spatial_partitioning {
            return;
        }

        self.use_spatial_partitioning = enabled;
        self.broad_phase = if enabled {
            Box::new(GridBroadPhase::new(self.bounds.x, self.bounds.y, self.cell_size))
        } else {
            Box::new(BruteForceBroadPhase::new())
        };
    }

    /// Returns whether the uniform grid is in use
    pub fn uses_spatial_partitioning(&self) -> bool {
        self.use_spatial_partitioning
    }

    /// Forces the narrow phase onto the main thread
    pub fn set_single_threaded(&mut self, enabled: bool) {
        self.single_threaded = enabled;
    }

    /// Returns whether the narrow phase is forced onto the main thread
    pub fn is_single_threaded(&self) -> bool {
        self.single_threaded
    }

    /// Runs one full simulation tick and returns the number of candidate
    /// pairs the broad phase produced
    pub fn step(&mut self, simulation_time: f64, dt: f64) -> usize {
        let dt = dt as f32;

        self.spawner.spawn(&mut self.store, simulation_time);

        // Freeze positions for interpolation before anything mutates them
        self.store.freeze_previous_positions();

        integrator::integrate(&mut self.store, self.config.gravity, dt);
        walls::resolve(&mut self.store, self.bounds, self.config.restitution);

        self.detect_collisions();
        let collision_checks = self.pairs.len();
        self.resolve_collisions();

        collision_checks
    }

    /// Fills the per-worker contact buffers for the current positions
    fn detect_collisions(&mut self) {
        {
            let store = &self.store;
            self.broad_phase.collect_pairs(
                store.positions_x(),
                store.positions_y(),
                self.bounds.x,
                self.bounds.y,
                &mut self.pairs,
            );
        }

        for buffer in &mut self.contact_buffers {
            buffer.clear();
        }

        self.run_narrow_phase();
    }

    #[cfg(feature = "parallel")]
    fn run_narrow_phase(&mut self) {
        if self.single_threaded || self.pairs.len() < PARALLEL_CUTOFF {
            self.run_narrow_phase_serial();
        } else {
            self.run_narrow_phase_parallel();
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_narrow_phase(&mut self) {
        self.run_narrow_phase_serial();
    }

    fn run_narrow_phase_serial(&mut self) {
        let store = &self.store;
        let buffer = &mut self.contact_buffers[0];
        for &(i, j) in &self.pairs {
            narrow_phase::test_pair(i, j, store, buffer);
        }
    }

    /// Splits the pair list into one contiguous range per worker; every
    /// worker writes only its own buffer, so the merged contact order is
    /// deterministic regardless of completion order
    #[cfg(feature = "parallel")]
    fn run_narrow_phase_parallel(&mut self) {
        use rayon::prelude::*;

        let total = self.pairs.len();
        let worker_count = self.contact_buffers.len();
        let chunk_size = (total + worker_count - 1) / worker_count;

        let store = &self.store;
        let pairs = &self.pairs[..];
        let buffers = &mut self.contact_buffers;

        self.pool.install(|| {
            buffers
                .par_iter_mut()
                .enumerate()
                .for_each(|(worker, buffer)| {
                    let start = (worker * chunk_size).min(total);
                    let end = ((worker + 1) * chunk_size).min(total);

                    for &(i, j) in &pairs[start..end] {
                        narrow_phase::test_pair(i, j, store, buffer);
                    }
                });
        });
    }

    /// Applies impulses once, then iterates positional correction
    fn resolve_collisions(&mut self) {
        for buffer in &self.contact_buffers {
            for contact in buffer {
                solver::resolve_velocity(contact, &mut self.store, self.config.restitution);
            }
        }

        for iteration in 0..self.config.correction_iterations {
            // Later iterations pick up contacts the previous corrections
            // uncovered, and drop those they resolved
            if iteration > 0 {
                self.detect_collisions();
            }

            for buffer in &self.contact_buffers {
                for contact in buffer {
                    solver::correct_position(contact, &mut self.store, self.bounds);
                }
            }
        }
    }
}
