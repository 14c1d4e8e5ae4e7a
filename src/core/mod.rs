pub mod config;
pub mod engine;
pub mod spawner;
pub mod stepper;
pub mod store;

pub use self::config::EngineConfig;
pub use self::engine::Engine;
pub use self::spawner::Spawner;
pub use self::stepper::{StepController, StepReport};
pub use self::store::{Disk, DiskSnapshot, DiskStore};

/// Half-extents of the axis-aligned container the disks live in.
///
/// The world is the rectangle `[-x, x] × [-y, y]`. The host updates the
/// bounds every frame so the container tracks the viewport aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub x: f32,
    pub y: f32,
}

impl WorldBounds {
    /// Creates world bounds from half-extents
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
