//! Play-field geometry
//!
//! Read-only descriptor of the rectangular field and the projectile body
//! footprint, supplied by the embedding application (screen, arena, ...).
//! World y grows upward; the screen-space flip happens only when the
//! bounding box and render positions are derived.

use serde::{Deserialize, Serialize};

/// Axis-aligned field bounds plus the body's on-screen footprint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldGeometry {
    /// Field width in world units
    pub width: f64,
    /// Field height in world units
    pub height: f64,
    /// Floor contact level (bodies rest at or above this y)
    pub floor: f64,
    /// Body width in lattice units
    pub body_width: i32,
    /// Body height in lattice units
    pub body_height: i32,
}

impl FieldGeometry {
    /// Field with the floor sitting one body-height above y = 0
    pub fn new(width: f64, height: f64, body_width: i32, body_height: i32) -> Self {
        Self {
            width,
            height,
            floor: body_height as f64,
            body_width,
            body_height,
        }
    }

    /// Largest x the body's left edge may occupy
    #[inline]
    pub fn x_max(&self) -> f64 {
        self.width - self.body_width as f64
    }

    /// Body is touching the floor or ceiling
    #[inline]
    pub fn vertical_contact(&self, y: f64) -> bool {
        y <= self.floor || y >= self.height
    }

    /// Body is touching the left or right wall
    #[inline]
    pub fn horizontal_contact(&self, x: f64) -> bool {
        x <= 0.0 || x >= self.x_max()
    }
}
