//! Cannonade - per-projectile ballistic simulation core
//!
//! Core modules:
//! - `sim`: Deterministic physics (drag, integration, rest detection, trails)
//! - `field`: Read-only play-field geometry descriptor
//! - `render`: Renderer capability consumed by the owning caller
//! - `logging`: Optional per-tick position sink
//! - `settings`: Externally-owned simulation configuration

pub mod field;
pub mod logging;
pub mod render;
pub mod settings;
pub mod sim;

pub use field::FieldGeometry;
pub use settings::Settings;
pub use sim::{BoundaryBox, PhysicalProperties, Projectile, TrailBuffer};

use glam::DVec2;

/// Physics and presentation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz reference rate)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Gravitational acceleration (m/s²); down is negative y
    pub const GRAVITY: f64 = -9.8;
    /// Air density at sea level (kg/m³)
    pub const AIR_DENSITY: f64 = 1.2041;
    /// Drag coefficient for a smooth sphere
    pub const DRAG_COEFFICIENT: f64 = 0.47;
    /// Kinetic friction coefficient while in boundary contact
    pub const KINETIC_FRICTION: f64 = 0.1;
    /// Boundary recoil factor: flips velocity direction and damps magnitude
    pub const RECOIL: f64 = -0.8;
    /// Speed below which a body is considered at rest
    pub const MIN_VELOCITY: f64 = 0.1;

    /// Density of steel (kg/m³), the default projectile material
    pub const BALL_DENSITY: f64 = 7850.0;
    /// Default projectile radius (m)
    pub const BALL_RADIUS: f64 = 5.0;

    /// Mass-to-alpha mapping: `alpha = ratio * ln(mass) + offset`, clamped
    pub const MASS_ALPHA_RATIO: f64 = 10.0;
    pub const MASS_ALPHA_OFFSET: f64 = 55.0;
    pub const ALPHA_MINIMUM: f64 = 30.0;
}

/// Decompose polar (speed, angle) into a cartesian velocity
#[inline]
pub fn polar_to_cartesian(speed: f64, angle: f64) -> DVec2 {
    DVec2::new(speed * angle.cos(), speed * angle.sin())
}
