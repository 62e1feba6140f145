//! Projectile aggregate
//!
//! Owns the kinematic state, physical properties and trail of one ballistic
//! body and coordinates the per-tick pipeline: drag → integrate → discrete
//! projection → bounding box → rest gate → trail sample. Rendering and
//! logging happen outside, driven by the owner from post-update state.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::{drag, integrate, lifecycle};
use super::{BoundaryBox, PhysicalProperties, TrailBuffer};
use crate::consts::{BALL_DENSITY, BALL_RADIUS, GRAVITY, SIM_DT};
use crate::field::FieldGeometry;
use crate::polar_to_cartesian;
use crate::render::Color;
use crate::settings::Settings;

/// One ballistic body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    id: u32,
    /// Continuous world-space position of the body
    pos: DVec2,
    /// Lattice projection of `pos`: rounded, clamped to ≥ 0 per axis
    place: IVec2,
    vel: DVec2,
    acc: DVec2,
    props: PhysicalProperties,
    bbox: BoundaryBox,
    /// Cosmetic tag consumed only by the renderer
    color: Color,
    drag_enabled: bool,
    active: bool,
    trail: Option<TrailBuffer>,
    /// Timestep of the most recent update
    last_dt: f64,
}

impl Projectile {
    /// Inactive body with default material values; call
    /// [`initialize`](Projectile::initialize) before simulating it.
    pub fn new(settings: &Settings, color: Color) -> Self {
        Self {
            id: 0,
            pos: DVec2::ZERO,
            place: IVec2::ZERO,
            vel: DVec2::ZERO,
            acc: DVec2::new(0.0, GRAVITY),
            props: PhysicalProperties::new(BALL_RADIUS, BALL_DENSITY),
            bbox: BoundaryBox::default(),
            color,
            drag_enabled: settings.drag,
            active: false,
            trail: settings
                .trail
                .then(|| TrailBuffer::new(settings.trail_capacity, settings.trail_delay)),
            last_dt: SIM_DT,
        }
    }

    /// Arm the body for simulation: identity, radius (density keeps its
    /// default), launch position and a velocity decomposed from polar
    /// (speed, angle). Acceleration resets to gravity-only.
    pub fn initialize(&mut self, radius: f64, place: IVec2, speed: f64, angle: f64, id: u32) {
        self.id = id;
        self.props.radius = radius;
        self.props.recompute_derived();

        self.acc = DVec2::new(0.0, GRAVITY);
        self.place = place;
        self.pos = place.as_dvec2();
        self.vel = polar_to_cartesian(speed, angle);
        self.active = true;

        if self.drag_enabled {
            log::debug!("projectile {id}: drag enabled");
        }
    }

    /// Advance one tick.
    ///
    /// Mutates all kinematic state; performs no rendering or logging. The
    /// owner must stop calling this once [`active`](Projectile::active) goes
    /// false - updating a resting body is not checked here.
    pub fn update(&mut self, dt: f64, field: &FieldGeometry) {
        self.last_dt = dt;

        if self.drag_enabled {
            self.acc = drag::acceleration(self.vel, &self.props, self.pos, field);
        }

        integrate::step(&mut self.pos, &mut self.vel, self.acc, dt, field);
        self.place = integrate::discretize(self.pos);
        self.bbox = integrate::bounding_box(self.place, field);

        if lifecycle::at_rest(self.vel) {
            if self.active {
                log::debug!("projectile {}: at rest, deactivating", self.id);
            }
            self.active = false;
        }

        if let Some(trail) = &mut self.trail {
            trail.maybe_sample(self.place);
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Continuous position
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    /// Discrete position
    pub fn place(&self) -> IVec2 {
        self.place
    }

    /// Teleport the body; the continuous position follows the new place
    pub fn set_place(&mut self, place: IVec2) {
        self.place = place;
        self.pos = place.as_dvec2();
    }

    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    pub fn set_velocity(&mut self, vel: DVec2) {
        self.vel = vel;
    }

    pub fn acceleration(&self) -> DVec2 {
        self.acc
    }

    pub fn props(&self) -> &PhysicalProperties {
        &self.props
    }

    /// Replace the physical properties wholesale (used by external managers
    /// when merging two bodies). The caller supplies consistent derived
    /// fields or recomputes them before the next update.
    pub fn set_props(&mut self, props: PhysicalProperties) {
        self.props = props;
    }

    pub fn bounding_box(&self) -> BoundaryBox {
        self.bbox
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    pub fn trail(&self) -> Option<&TrailBuffer> {
        self.trail.as_ref()
    }

    pub fn last_dt(&self) -> f64 {
        self.last_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRAVITY, MIN_VELOCITY};
    use std::f64::consts::FRAC_PI_4;

    fn field() -> FieldGeometry {
        FieldGeometry::new(640.0, 480.0, 20, 20)
    }

    fn no_trail_settings() -> Settings {
        Settings {
            trail: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_initialize_decomposes_velocity() {
        let mut ball = Projectile::new(&no_trail_settings(), Color::default());
        ball.initialize(5.0, IVec2::new(10, 100), 100.0, FRAC_PI_4, 7);

        assert_eq!(ball.id(), 7);
        assert!(ball.active());
        let expected = 100.0 * FRAC_PI_4.cos();
        assert!((ball.velocity().x - expected).abs() < 1e-9);
        assert!((ball.velocity().y - expected).abs() < 1e-9);
        assert_eq!(ball.place(), IVec2::new(10, 100));
        assert_eq!(ball.pos(), DVec2::new(10.0, 100.0));
        assert_eq!(ball.acceleration(), DVec2::new(0.0, GRAVITY));
    }

    #[test]
    fn test_first_tick_of_free_fall() {
        // Steel ball dropped from (0, 100) with no drag
        let mut ball = Projectile::new(&no_trail_settings(), Color::default());
        ball.initialize(5.0, IVec2::new(0, 100), 0.0, 0.0, 1);

        let dt = 1.0 / 60.0;
        ball.update(dt, &field());

        assert!((ball.velocity().y - GRAVITY * dt).abs() < 1e-9);
        assert!(ball.pos().y < 100.0);
        assert_eq!(ball.velocity().x, 0.0);
        assert_eq!(ball.last_dt(), dt);
    }

    #[test]
    fn test_dropped_ball_eventually_rests() {
        let mut ball = Projectile::new(&no_trail_settings(), Color::default());
        ball.initialize(5.0, IVec2::new(100, 100), 0.0, 0.0, 1);

        let field = field();
        let mut ticks = 0u32;
        while ball.active() && ticks < 100_000 {
            ball.update(1.0 / 60.0, &field);
            ticks += 1;
        }

        assert!(!ball.active(), "ball never came to rest");
        assert!(ball.velocity().length() < MIN_VELOCITY);
    }

    #[test]
    fn test_place_tracks_rounded_clamped_position() {
        let mut ball = Projectile::new(&no_trail_settings(), Color::default());
        ball.initialize(5.0, IVec2::new(300, 300), 80.0, -FRAC_PI_4, 1);

        let field = field();
        for _ in 0..30 {
            ball.update(1.0 / 60.0, &field);
            let expected = integrate::discretize(ball.pos());
            assert_eq!(ball.place(), expected);
            assert!(ball.place().x >= 0 && ball.place().y >= 0);
        }
    }

    #[test]
    fn test_bounding_box_follows_place() {
        let mut ball = Projectile::new(&no_trail_settings(), Color::default());
        ball.initialize(5.0, IVec2::new(200, 240), 50.0, 0.3, 1);

        let field = field();
        ball.update(1.0 / 60.0, &field);

        let bbox = ball.bounding_box();
        assert_eq!(bbox.left, ball.place().x);
        assert_eq!(bbox.top, 480 - ball.place().y);
        assert_eq!(bbox.right - bbox.left, 20);
        assert_eq!(bbox.bottom - bbox.top, 20);
    }

    #[test]
    fn test_drag_setting_changes_acceleration() {
        let settings = Settings {
            drag: true,
            trail: false,
            ..Settings::default()
        };
        let mut dragged = Projectile::new(&settings, Color::default());
        dragged.initialize(5.0, IVec2::new(300, 300), 60.0, FRAC_PI_4, 1);

        let mut ballistic = Projectile::new(&no_trail_settings(), Color::default());
        ballistic.initialize(5.0, IVec2::new(300, 300), 60.0, FRAC_PI_4, 2);

        let field = field();
        dragged.update(1.0 / 60.0, &field);
        ballistic.update(1.0 / 60.0, &field);

        assert!(dragged.drag_enabled());
        assert!(!ballistic.drag_enabled());
        assert_ne!(dragged.acceleration(), ballistic.acceleration());
        assert_eq!(ballistic.acceleration(), DVec2::new(0.0, GRAVITY));
    }

    #[test]
    fn test_trail_samples_during_update() {
        let settings = Settings {
            trail: true,
            trail_capacity: 4,
            trail_delay: 1,
            ..Settings::default()
        };
        let mut ball = Projectile::new(&settings, Color::default());
        ball.initialize(5.0, IVec2::new(100, 400), 40.0, 0.0, 1);

        let field = field();
        for _ in 0..4 {
            ball.update(1.0 / 60.0, &field);
        }

        let trail = ball.trail().unwrap();
        assert_eq!(trail.len(), 4);
        // Delay of 1 samples every tick, so the newest entry is the current
        // place and no sentinel remains
        let points: Vec<_> = trail.iter().collect();
        assert_eq!(points[3], ball.place());
        assert!(points.iter().all(|p| p.x > 0));
    }

    #[test]
    fn test_mutators_support_external_merge() {
        let mut ball = Projectile::new(&no_trail_settings(), Color::default());
        ball.initialize(5.0, IVec2::new(50, 50), 10.0, 0.0, 1);

        // A perfectly inelastic merge done by an external manager
        let mut merged = PhysicalProperties::new(6.3, BALL_DENSITY);
        merged.recompute_derived();
        ball.set_props(merged);
        ball.set_velocity(DVec2::new(2.0, -1.0));
        ball.set_place(IVec2::new(80, 90));

        assert!((ball.props().radius - 6.3).abs() < 1e-12);
        assert_eq!(ball.velocity(), DVec2::new(2.0, -1.0));
        assert_eq!(ball.pos(), DVec2::new(80.0, 90.0));
    }
}
