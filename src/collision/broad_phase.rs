use crate::collision::spatial_grid::SpatialGrid;

/// Trait for broad-phase collision detection algorithms
///
/// Implementations fill `pairs` with candidate index pairs; the narrow phase
/// decides which of them actually touch.
pub trait BroadPhase: Send {
    /// Collects all candidate pairs for the current disk positions
    fn collect_pairs(
        &mut self,
        positions_x: &[f32],
        positions_y: &[f32],
        bound_x: f32,
        bound_y: f32,
        pairs: &mut Vec<(u32, u32)>,
    );
}

/// Brute-force broad-phase emitting every index pair
///
/// Quadratic in the disk count; kept for benchmarking against the grid.
pub struct BruteForceBroadPhase;

impl BruteForceBroadPhase {
    /// Creates a new brute-force broad-phase
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceBroadPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn collect_pairs(
        &mut self,
        positions_x: &[f32],
        _positions_y: &[f32],
        _bound_x: f32,
        _bound_y: f32,
        pairs: &mut Vec<(u32, u32)>,
    ) {
        pairs.clear();

        let count = positions_x.len();
        for i in 0..count {
            for j in (i + 1)..count {
                pairs.push((i as u32, j as u32));
            }
        }
    }
}

/// Uniform-grid broad-phase
///
/// Rebuilds the grid from scratch every call: cells are cleared, every disk
/// is inserted at its center cell, and the grid enumerates the pairs.
pub struct GridBroadPhase {
    grid: SpatialGrid,
}

impl GridBroadPhase {
    /// Creates a grid broad-phase for the given initial bounds and cell size
    pub fn new(bound_x: f32, bound_y: f32, cell_size: f32) -> Self {
        Self {
            grid: SpatialGrid::new(bound_x, bound_y, cell_size),
        }
    }
}

impl BroadPhase for GridBroadPhase {
    fn collect_pairs(
        &mut self,
        positions_x: &[f32],
        positions_y: &[f32],
        bound_x: f32,
        bound_y: f32,
        pairs: &mut Vec<(u32, u32)>,
    ) {
        self.grid.update_dimensions(bound_x, bound_y);
        self.grid.clear();

        for i in 0..positions_x.len() {
            self.grid.insert(i as u32, positions_x[i], positions_y[i]);
        }

        self.grid.collect_pairs(pairs);
    }
}
