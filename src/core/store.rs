use crate::math::Vector2;

/// A single disk, used to feed the store
///
/// Mass is derived from the radius with density 1; the pi factor is dropped
/// since only mass ratios enter the solver.
#[derive(Debug, Clone, Copy)]
pub struct Disk {
    /// Center position in world units
    pub position: Vector2,

    /// Velocity in world units per second
    pub velocity: Vector2,

    /// Radius in world units, must be positive
    pub radius: f32,

    /// Inverse mass; 0 means the disk cannot be moved by other disks
    pub inverse_mass: f32,

    /// RGB color passed through to the renderer
    pub color: [f32; 3],
}

impl Disk {
    /// Creates a movable disk at rest with mass derived from its radius
    pub fn new(position: Vector2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vector2::zero(),
            radius,
            inverse_mass: 1.0 / (radius * radius),
            color: [1.0, 1.0, 1.0],
        }
    }

    /// Creates an immovable disk (infinite mass)
    pub fn fixed(position: Vector2, radius: f32) -> Self {
        Self {
            inverse_mass: 0.0,
            ..Self::new(position, radius)
        }
    }

    /// Sets the initial velocity
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the color
    pub fn with_color(mut self, red: f32, green: f32, blue: f32) -> Self {
        self.color = [red, green, blue];
        self
    }
}

/// Structure-of-arrays storage for all live disks
///
/// Every attribute lives in its own column so the solver's hot loops touch
/// only the columns they need. Slot ids are plain indices: disks are never
/// removed or reordered, and every column is pre-reserved to the spawn limit
/// so appends cannot reallocate mid-simulation.
pub struct DiskStore {
    positions_x: Vec<f32>,
    positions_y: Vec<f32>,
    previous_positions_x: Vec<f32>,
    previous_positions_y: Vec<f32>,
    velocities_x: Vec<f32>,
    velocities_y: Vec<f32>,
    radii: Vec<f32>,
    inverse_masses: Vec<f32>,
    colors_r: Vec<f32>,
    colors_g: Vec<f32>,
    colors_b: Vec<f32>,
    outline_widths: Vec<f32>,
}

impl DiskStore {
    /// Creates an empty store with every column reserved to `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions_x: Vec::with_capacity(capacity),
            positions_y: Vec::with_capacity(capacity),
            previous_positions_x: Vec::with_capacity(capacity),
            previous_positions_y: Vec::with_capacity(capacity),
            velocities_x: Vec::with_capacity(capacity),
            velocities_y: Vec::with_capacity(capacity),
            radii: Vec::with_capacity(capacity),
            inverse_masses: Vec::with_capacity(capacity),
            colors_r: Vec::with_capacity(capacity),
            colors_g: Vec::with_capacity(capacity),
            colors_b: Vec::with_capacity(capacity),
            outline_widths: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of live disks
    #[inline]
    pub fn len(&self) -> usize {
        self.positions_x.len()
    }

    /// Returns whether the store holds no disks
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions_x.is_empty()
    }

    /// Appends a disk and returns its slot id
    ///
    /// The previous-position columns start out equal to the position so a
    /// freshly spawned disk interpolates to itself.
    pub fn push(&mut self, disk: &Disk, outline_width: f32) -> usize {
        self.positions_x.push(disk.position.x);
        self.positions_y.push(disk.position.y);
        self.previous_positions_x.push(disk.position.x);
        self.previous_positions_y.push(disk.position.y);
        self.velocities_x.push(disk.velocity.x);
        self.velocities_y.push(disk.velocity.y);
        self.radii.push(disk.radius);
        self.inverse_masses.push(disk.inverse_mass);
        self.colors_r.push(disk.color[0]);
        self.colors_g.push(disk.color[1]);
        self.colors_b.push(disk.color[2]);
        self.outline_widths.push(outline_width);

        self.len() - 1
    }

    /// Copies the current positions into the previous-position columns
    ///
    /// Must run at the top of a tick, before anything mutates the positions;
    /// the renderer interpolates between the two column pairs.
    pub fn freeze_previous_positions(&mut self) {
        self.previous_positions_x.copy_from_slice(&self.positions_x);
        self.previous_positions_y.copy_from_slice(&self.positions_y);
    }

    #[inline]
    pub fn position(&self, index: usize) -> Vector2 {
        Vector2::new(self.positions_x[index], self.positions_y[index])
    }

    #[inline]
    pub fn velocity(&self, index: usize) -> Vector2 {
        Vector2::new(self.velocities_x[index], self.velocities_y[index])
    }

    #[inline]
    pub fn position_x(&self, index: usize) -> f32 {
        self.positions_x[index]
    }

    #[inline]
    pub fn position_y(&self, index: usize) -> f32 {
        self.positions_y[index]
    }

    #[inline]
    pub fn set_position_x(&mut self, index: usize, value: f32) {
        self.positions_x[index] = value;
    }

    #[inline]
    pub fn set_position_y(&mut self, index: usize, value: f32) {
        self.positions_y[index] = value;
    }

    #[inline]
    pub fn velocity_x(&self, index: usize) -> f32 {
        self.velocities_x[index]
    }

    #[inline]
    pub fn velocity_y(&self, index: usize) -> f32 {
        self.velocities_y[index]
    }

    #[inline]
    pub fn set_velocity_x(&mut self, index: usize, value: f32) {
        self.velocities_x[index] = value;
    }

    #[inline]
    pub fn set_velocity_y(&mut self, index: usize, value: f32) {
        self.velocities_y[index] = value;
    }

    #[inline]
    pub fn radius(&self, index: usize) -> f32 {
        self.radii[index]
    }

    #[inline]
    pub fn inverse_mass(&self, index: usize) -> f32 {
        self.inverse_masses[index]
    }

    /// Read-only view of the position x column
    #[inline]
    pub fn positions_x(&self) -> &[f32] {
        &self.positions_x
    }

    /// Read-only view of the position y column
    #[inline]
    pub fn positions_y(&self) -> &[f32] {
        &self.positions_y
    }

    /// Borrows every column for the renderer
    pub fn snapshot(&self) -> DiskSnapshot<'_> {
        DiskSnapshot {
            count: self.len(),
            positions_x: &self.positions_x,
            positions_y: &self.positions_y,
            previous_positions_x: &self.previous_positions_x,
            previous_positions_y: &self.previous_positions_y,
            velocities_x: &self.velocities_x,
            velocities_y: &self.velocities_y,
            radii: &self.radii,
            colors_r: &self.colors_r,
            colors_g: &self.colors_g,
            colors_b: &self.colors_b,
            outline_widths: &self.outline_widths,
        }
    }
}

/// Borrow-read of every store column, the engine's output contract
///
/// `positions_*` hold the latest tick and `previous_positions_*` the tick
/// before it; drawing at `lerp(previous, current, alpha)` with the step
/// controller's interpolation factor gives sub-tick-smooth motion.
#[derive(Debug, Clone, Copy)]
pub struct DiskSnapshot<'a> {
    pub count: usize,
    pub positions_x: &'a [f32],
    pub positions_y: &'a [f32],
    pub previous_positions_x: &'a [f32],
    pub previous_positions_y: &'a [f32],
    pub velocities_x: &'a [f32],
    pub velocities_y: &'a [f32],
    pub radii: &'a [f32],
    pub colors_r: &'a [f32],
    pub colors_g: &'a [f32],
    pub colors_b: &'a [f32],
    pub outline_widths: &'a [f32],
}
