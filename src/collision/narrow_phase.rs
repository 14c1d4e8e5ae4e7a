use crate::core::store::DiskStore;
use crate::math::Vector2;

/// A detected overlap between two disks, valid for one tick
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Slot id of the first disk
    pub first: u32,

    /// Slot id of the second disk
    pub second: u32,

    /// Unit normal pointing from the first disk to the second
    pub normal: Vector2,

    /// How much closer the disks are than their radii allow
    pub penetration: f32,
}

/// Tests a candidate pair and appends a contact if the disks overlap
///
/// Works on squared distances until an overlap is confirmed. Coincident
/// centers get an arbitrary but fixed normal so the solver can still
/// separate them.
#[inline]
pub fn test_pair(first: u32, second: u32, store: &DiskStore, contacts: &mut Vec<Contact>) {
    let i = first as usize;
    let j = second as usize;

    let delta = store.position(j) - store.position(i);
    let radii = store.radius(i) + store.radius(j);
    let distance_squared = delta.length_squared();

    if distance_squared >= radii * radii {
        return;
    }

    let distance = distance_squared.sqrt();
    let normal = if distance > 0.0 {
        delta / distance
    } else {
        Vector2::unit_x()
    };

    contacts.push(Contact {
        first,
        second,
        normal,
        penetration: radii - distance,
    });
}
