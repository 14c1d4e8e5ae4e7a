/// A uniform grid over the container for broad-phase collision detection
///
/// The cell size is the maximum disk diameter, so any two overlapping disks
/// sit in the same or in adjacent cells and only those need to be searched.
/// Logically the grid is a two-dimensional array of index lists where cell
/// `(x, y)` lives at `y * cell_count_x + x`.
pub struct SpatialGrid {
    bound_x: f32,
    bound_y: f32,
    cell_size: f32,
    cell_count_x: usize,
    cell_count_y: usize,
    cells: Vec<Vec<u32>>,
}

impl SpatialGrid {
    /// Minimum cell size, guards against degenerate configurations
    const MIN_CELL_SIZE: f32 = 0.01;

    /// Creates a grid covering the given half-extents
    pub fn new(bound_x: f32, bound_y: f32, cell_size_hint: f32) -> Self {
        let mut grid = Self {
            bound_x: 0.0,
            bound_y: 0.0,
            cell_size: cell_size_hint.max(Self::MIN_CELL_SIZE),
            cell_count_x: 0,
            cell_count_y: 0,
            cells: Vec::new(),
        };
        grid.update_dimensions(bound_x, bound_y);
        grid
    }

    /// Adjusts the cell layout if the world bounds changed enough to matter
    ///
    /// Cell storage is only touched when the cell counts actually change, so
    /// calling this every tick is cheap.
    pub fn update_dimensions(&mut self, bound_x: f32, bound_y: f32) {
        self.bound_x = bound_x;
        self.bound_y = bound_y;

        let new_cell_count_x = (2.0 * bound_x / self.cell_size) as usize + 1;
        let new_cell_count_y = (2.0 * bound_y / self.cell_size) as usize + 1;

        if new_cell_count_x != self.cell_count_x || new_cell_count_y != self.cell_count_y {
            self.cell_count_x = new_cell_count_x;
            self.cell_count_y = new_cell_count_y;
            self.cells
                .resize_with(new_cell_count_x * new_cell_count_y, Vec::new);
        }
    }

    /// Empties every cell for the next tick, keeping their capacity
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Inserts a disk index at the cell covering its center
    ///
    /// Positions outside the grid are silently skipped; this happens briefly
    /// after a window resize and wall resolution pulls those disks back into
    /// the world within a tick.
    pub fn insert(&mut self, index: u32, x: f32, y: f32) {
        let cell_x = ((x + self.bound_x) / self.cell_size) as i64;
        let cell_y = ((y + self.bound_y) / self.cell_size) as i64;

        if cell_x >= 0
            && (cell_x as usize) < self.cell_count_x
            && cell_y >= 0
            && (cell_y as usize) < self.cell_count_y
        {
            self.cells[cell_y as usize * self.cell_count_x + cell_x as usize].push(index);
        }
    }

    /// Emits every candidate pair exactly once
    ///
    /// Cells are walked in row-major order. For each cell the intra-cell
    /// pairs come first (second index later in the list), then the cartesian
    /// products with the right, down, down-right and down-left neighbours.
    /// This forward half-stencil visits each unordered cell pair once.
    pub fn collect_pairs(&self, pairs: &mut Vec<(u32, u32)>) {
        pairs.clear();

        for y in 0..self.cell_count_y {
            for x in 0..self.cell_count_x {
                let cell = &self.cells[y * self.cell_count_x + x];

                for i in 0..cell.len() {
                    for j in (i + 1)..cell.len() {
                        pairs.push((cell[i], cell[j]));
                    }
                }

                if x + 1 < self.cell_count_x {
                    cross_pairs(cell, &self.cells[y * self.cell_count_x + (x + 1)], pairs);
                }

                if y + 1 < self.cell_count_y {
                    cross_pairs(cell, &self.cells[(y + 1) * self.cell_count_x + x], pairs);
                }

                if x + 1 < self.cell_count_x && y + 1 < self.cell_count_y {
                    cross_pairs(
                        cell,
                        &self.cells[(y + 1) * self.cell_count_x + (x + 1)],
                        pairs,
                    );
                }

                if x > 0 && y + 1 < self.cell_count_y {
                    cross_pairs(
                        cell,
                        &self.cells[(y + 1) * self.cell_count_x + (x - 1)],
                        pairs,
                    );
                }
            }
        }
    }

    /// Returns the cell counts along x and y
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cell_count_x, self.cell_count_y)
    }
}

fn cross_pairs(first: &[u32], second: &[u32], pairs: &mut Vec<(u32, u32)>) {
    for &a in first {
        for &b in second {
            pairs.push((a, b));
        }
    }
}
