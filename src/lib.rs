pub mod math;
pub mod core;
pub mod collision;
pub mod dynamics;

/// Re-export common types for easier usage
pub use crate::core::{Disk, DiskSnapshot, Engine, EngineConfig, StepController, StepReport};
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum EngineError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Spawn limit of {0} disks reached")]
        SpawnLimitReached(usize),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::EngineError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
