use crate::core::store::DiskStore;
use crate::core::WorldBounds;

/// Reflects disks off the container walls
///
/// Runs right after integration, before pair-wise detection. For each axis a
/// penetrating disk has its velocity component reflected and scaled by the
/// restitution, and its position clamped to just inside the wall. The axes
/// are independent: a disk in a corner bounces off both walls in one tick.
pub fn resolve(store: &mut DiskStore, bounds: WorldBounds, restitution: f32) {
    for i in 0..store.len() {
        let x = store.position_x(i);
        let y = store.position_y(i);
        let radius = store.radius(i);

        if x - radius < -bounds.x {
            // Left wall
            store.set_velocity_x(i, -store.velocity_x(i) * restitution);
            store.set_position_x(i, -bounds.x + radius);
        } else if x + radius > bounds.x {
            // Right wall
            store.set_velocity_x(i, -store.velocity_x(i) * restitution);
            store.set_position_x(i, bounds.x - radius);
        }

        if y - radius < -bounds.y {
            // Floor
            store.set_velocity_y(i, -store.velocity_y(i) * restitution);
            store.set_position_y(i, -bounds.y + radius);
        } else if y + radius > bounds.y {
            // Ceiling
            store.set_velocity_y(i, -store.velocity_y(i) * restitution);
            store.set_position_y(i, bounds.y - radius);
        }
    }
}
