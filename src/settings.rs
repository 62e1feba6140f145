//! Simulation settings
//!
//! Owned by the embedding application and passed in explicitly; the sim core
//! never reads configuration from globals.

use serde::{Deserialize, Serialize};

/// Simulation configuration, read at projectile construction time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Apply aerodynamic drag and boundary friction during updates
    pub drag: bool,
    /// Maintain a position trail for rendering
    pub trail: bool,
    /// Number of past positions retained in the trail
    pub trail_capacity: usize,
    /// Ticks between trail samples
    pub trail_delay: u32,
    /// Hand continuous positions to a `PositionSink` each tick
    pub logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag: false,
            trail: true,
            trail_capacity: 25,
            trail_delay: 5,
            logging: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize settings to a JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
