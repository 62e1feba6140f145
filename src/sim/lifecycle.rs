//! Rest detection
//!
//! A body is at rest once its total speed drops below the minimum threshold
//! or stops being a number. The owning caller is expected to stop updating a
//! resting body; nothing here enforces that.

use glam::DVec2;

use crate::consts::MIN_VELOCITY;

/// True when the body should be deactivated
pub fn at_rest(vel: DVec2) -> bool {
    let total = vel.length();
    total < MIN_VELOCITY || total.is_nan()
}
