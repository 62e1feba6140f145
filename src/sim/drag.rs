//! Drag and boundary-friction acceleration
//!
//! Combines gravity, quadratic aerodynamic drag and constant kinetic friction
//! while the body is in contact with a field edge.

use glam::DVec2;
use std::f64::consts::PI;

use super::props::PhysicalProperties;
use crate::consts::{AIR_DENSITY, DRAG_COEFFICIENT, GRAVITY, KINETIC_FRICTION};
use crate::field::FieldGeometry;

/// Direction of travel used to orient the drag vector.
///
/// `atan(vy/vx)` corrected by π when vx < 0, and π/2 when vx is exactly zero.
/// The vx = 0 case reports π/2 even for downward motion, and vx > 0, vy < 0
/// receives no correction; reference trajectories depend on both behaviors,
/// so they stay as-is.
pub fn travel_angle(vel: DVec2) -> f64 {
    let mut angle = if vel.x != 0.0 {
        (vel.y / vel.x).atan()
    } else {
        PI / 2.0
    };
    if vel.x < 0.0 {
        angle += PI;
    }
    angle
}

/// Total acceleration for one tick.
///
/// Gravity always applies. Drag and friction only apply when both velocity
/// components and the mass are nonzero; a body gliding exactly along one axis
/// falls back to gravity alone.
pub fn acceleration(
    vel: DVec2,
    props: &PhysicalProperties,
    pos: DVec2,
    field: &FieldGeometry,
) -> DVec2 {
    let mut acc = DVec2::new(0.0, GRAVITY);

    if vel.x != 0.0 && vel.y != 0.0 && props.mass != 0.0 {
        let flow_velocity = vel.length();
        let drag_force = 0.5 * AIR_DENSITY * flow_velocity * DRAG_COEFFICIENT * props.area;
        let drag_acc = drag_force / props.mass;
        let angle = travel_angle(vel);

        acc.x += drag_acc * angle.cos();
        acc.y += drag_acc * angle.sin();

        // GRAVITY is negative, so friction is too
        let friction = KINETIC_FRICTION * GRAVITY;

        if field.vertical_contact(pos.y) {
            // Floor or ceiling contact slows horizontal motion
            acc.x += friction * if vel.x < 0.0 { 1.0 } else { -1.0 };
        }
        if field.horizontal_contact(pos.x) {
            // Wall contact slows vertical motion
            acc.y += friction * if vel.y < 0.0 { 1.0 } else { -1.0 };
        }
    }

    acc
}
