//! Derived physical properties of a projectile body

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Geometric and material properties, with area/volume/mass derived from
/// radius and density. The derived fields are only ever written by
/// [`recompute_derived`](PhysicalProperties::recompute_derived); callers that
/// mutate `radius` or `density` must recompute before the next acceleration
/// calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Body radius (m), must be positive
    pub radius: f64,
    /// Material density (kg/m³), must be positive
    pub density: f64,
    /// Reference area for drag: 2π·r²
    pub area: f64,
    /// Spherical volume: (4/3)π·r³
    pub volume: f64,
    /// mass = density · volume
    pub mass: f64,
}

impl PhysicalProperties {
    pub fn new(radius: f64, density: f64) -> Self {
        let mut props = Self {
            radius,
            density,
            area: 0.0,
            volume: 0.0,
            mass: 0.0,
        };
        props.recompute_derived();
        props
    }

    /// Rederive area, volume and mass from the current radius and density
    pub fn recompute_derived(&mut self) {
        self.area = 2.0 * PI * self.radius.powi(2);
        self.volume = (4.0 / 3.0) * PI * self.radius.powi(3);
        self.mass = self.density * self.volume;
    }
}
