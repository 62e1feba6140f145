//! Position/velocity integration with boundary recoil
//!
//! Semi-implicit Euler per axis, x fully before y. The axes are independent
//! by design; a boundary crossing on one axis never couples into the other.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::consts::RECOIL;
use crate::field::FieldGeometry;

/// Screen-space collision rectangle derived from the discrete position.
/// Purely derived, recomputed every tick, never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Advance one timestep in place.
///
/// Positions that land outside the field are nudged one unit back toward the
/// interior after the recoil damping, so floating-point drift cannot pin a
/// body permanently past an edge.
pub fn step(pos: &mut DVec2, vel: &mut DVec2, acc: DVec2, dt: f64, field: &FieldGeometry) {
    pos.x += vel.x * dt + 0.5 * acc.x * dt * dt;
    vel.x += acc.x * dt;
    if pos.x <= 0.0 || pos.x >= field.x_max() {
        vel.x *= RECOIL;
        pos.x += if pos.x <= 0.0 { 1.0 } else { -1.0 };
    }

    pos.y += vel.y * dt + 0.5 * acc.y * dt * dt;
    vel.y += acc.y * dt;
    if pos.y <= field.floor || pos.y >= field.height {
        vel.y *= RECOIL;
        pos.y += if pos.y <= field.floor { 1.0 } else { -1.0 };
    }
}

/// Project a continuous position onto the lattice: round, then clamp to ≥ 0
pub fn discretize(pos: DVec2) -> IVec2 {
    IVec2::new(
        if pos.x < 0.0 { 0 } else { pos.x.round() as i32 },
        if pos.y < 0.0 { 0 } else { pos.y.round() as i32 },
    )
}

/// Collision rectangle for a discrete position, with the screen-space
/// vertical flip (`top = height - place.y`)
pub fn bounding_box(place: IVec2, field: &FieldGeometry) -> BoundaryBox {
    let left = place.x;
    let top = field.height as i32 - place.y;
    BoundaryBox {
        left,
        top,
        right: left + field.body_width,
        bottom: top + field.body_height,
    }
}
