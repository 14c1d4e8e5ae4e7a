pub mod broad_phase;
pub mod narrow_phase;
pub mod solver;
mod spatial_grid;

pub use self::broad_phase::{BroadPhase, BruteForceBroadPhase, GridBroadPhase};
pub use self::narrow_phase::Contact;
pub use self::spatial_grid::SpatialGrid;
