//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Explicit timestep and field geometry passed in per update
//! - No rendering or platform dependencies
//! - No global configuration reads

pub mod drag;
pub mod entity;
pub mod integrate;
pub mod lifecycle;
pub mod props;
pub mod trail;

pub use entity::Projectile;
pub use integrate::BoundaryBox;
pub use props::PhysicalProperties;
pub use trail::TrailBuffer;
