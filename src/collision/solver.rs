use crate::collision::narrow_phase::Contact;
use crate::core::store::DiskStore;
use crate::core::WorldBounds;

/// Applies the restitution impulse for one contact
///
/// Standard sequential impulse along the contact normal: pairs that are
/// already separating are left alone, and a pair of two immovable disks is
/// skipped outright.
pub fn resolve_velocity(contact: &Contact, store: &mut DiskStore, restitution: f32) {
    let i = contact.first as usize;
    let j = contact.second as usize;

    let first_inverse_mass = store.inverse_mass(i);
    let second_inverse_mass = store.inverse_mass(j);
    let total_inverse_mass = first_inverse_mass + second_inverse_mass;

    if total_inverse_mass <= 0.0 {
        return;
    }

    let relative_velocity = store.velocity(j) - store.velocity(i);
    let velocity_along_normal = relative_velocity.dot(&contact.normal);

    // Already separating
    if velocity_along_normal > 0.0 {
        return;
    }

    let impulse_magnitude = -(1.0 + restitution) * velocity_along_normal / total_inverse_mass;
    let impulse = contact.normal * impulse_magnitude;

    store.set_velocity_x(i, store.velocity_x(i) - impulse.x * first_inverse_mass);
    store.set_velocity_y(i, store.velocity_y(i) - impulse.y * first_inverse_mass);
    store.set_velocity_x(j, store.velocity_x(j) + impulse.x * second_inverse_mass);
    store.set_velocity_y(j, store.velocity_y(j) + impulse.y * second_inverse_mass);
}

/// Pushes an overlapping pair apart, never through a wall
///
/// The correction is split between the disks by inverse mass, one axis at a
/// time. If the split would push a disk past its side of the container, the
/// whole correction goes to the other disk instead: the walls win over the
/// mass ratio. This keeps positional correction from ever ejecting a disk,
/// without re-running wall resolution between solver iterations.
pub fn correct_position(contact: &Contact, store: &mut DiskStore, bounds: WorldBounds) {
    let i = contact.first as usize;
    let j = contact.second as usize;

    let first_inverse_mass = store.inverse_mass(i);
    let second_inverse_mass = store.inverse_mass(j);
    let total_inverse_mass = first_inverse_mass + second_inverse_mass;

    // Both disks have infinite mass
    if total_inverse_mass <= 0.0 {
        return;
    }

    let correction = contact.normal * (contact.penetration / total_inverse_mass);

    let first_radius = store.radius(i);
    let second_radius = store.radius(j);

    // X axis
    let correction_x = correction.x;
    if correction_x != 0.0 {
        let first_x = store.position_x(i) - correction_x * first_inverse_mass;
        let second_x = store.position_x(j) + correction_x * second_inverse_mass;

        // The first disk moves toward -x when the correction is positive
        let (first_breaches, second_breaches) = if correction_x > 0.0 {
            (
                first_x - first_radius < -bounds.x,
                second_x + second_radius > bounds.x,
            )
        } else {
            (
                first_x + first_radius > bounds.x,
                second_x - second_radius < -bounds.x,
            )
        };

        if first_breaches {
            // First disk is pinned against a wall, put all correction on the second
            store.set_position_x(j, store.position_x(j) + correction_x * total_inverse_mass);
        } else if second_breaches {
            // Second disk is pinned against a wall, put all correction on the first
            store.set_position_x(i, store.position_x(i) - correction_x * total_inverse_mass);
        } else {
            store.set_position_x(i, first_x);
            store.set_position_x(j, second_x);
        }
    }

    // Y axis, handled independently
    let correction_y = correction.y;
    if correction_y != 0.0 {
        let first_y = store.position_y(i) - correction_y * first_inverse_mass;
        let second_y = store.position_y(j) + correction_y * second_inverse_mass;

        let (first_breaches, second_breaches) = if correction_y > 0.0 {
            (
                first_y - first_radius < -bounds.y,
                second_y + second_radius > bounds.y,
            )
        } else {
            (
                first_y + first_radius > bounds.y,
                second_y - second_radius < -bounds.y,
            )
        };

        if first_breaches {
            store.set_position_y(j, store.position_y(j) + correction_y * total_inverse_mass);
        } else if second_breaches {
            store.set_position_y(i, store.position_y(i) - correction_y * total_inverse_mass);
        } else {
            store.set_position_y(i, first_y);
            store.set_position_y(j, second_y);
        }
    }
}
