use crate::core::store::DiskStore;

/// Advances every disk by one fixed time step of semi-implicit Euler
///
/// Gravity updates the velocity first and the new velocity updates the
/// position; this ordering is what makes the integrator semi-implicit.
/// Disks with infinite mass never receive gravity.
pub fn integrate(store: &mut DiskStore, gravity: f32, dt: f32) {
    for i in 0..store.len() {
        if store.inverse_mass(i) > 0.0 {
            store.set_velocity_y(i, store.velocity_y(i) - gravity * dt);
        }

        store.set_position_x(i, store.position_x(i) + store.velocity_x(i) * dt);
        store.set_position_y(i, store.position_y(i) + store.velocity_y(i) * dt);
    }
}
