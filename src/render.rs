//! Renderer capability
//!
//! The sim core never draws. It exposes a [`Renderer`] trait for the
//! embedding application plus the presentation contract it owns: screen-space
//! placement and the mass-to-alpha mapping.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{ALPHA_MINIMUM, MASS_ALPHA_OFFSET, MASS_ALPHA_RATIO};
use crate::field::FieldGeometry;
use crate::sim::Projectile;

/// Cosmetic body color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Sample a color from an injected RNG; construction stays deterministic
    /// under a seeded generator
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self {
            red: rng.random_range(0..=255),
            green: rng.random_range(0..=255),
            blue: rng.random_range(0..=255),
        }
    }
}

/// Drawing surface implemented by the embedding application
pub trait Renderer {
    /// Draw the body texture at a screen position with the given tint/alpha
    fn draw(&mut self, screen_pos: IVec2, color: Color, alpha: u8);

    /// Draw one point of the body's trail
    fn draw_trail_point(&mut self, screen_pos: IVec2, color: Color);
}

/// Alpha handed to the renderer: heavier bodies draw more opaque.
/// `clamp(ratio·ln(mass) + offset, minimum, 255)`
pub fn mass_alpha(mass: f64) -> u8 {
    (MASS_ALPHA_RATIO * mass.ln() + MASS_ALPHA_OFFSET).clamp(ALPHA_MINIMUM, 255.0) as u8
}

/// Present one projectile and its trail from post-update state.
///
/// Screen space keeps x and flips y (`screen_y = height - place.y`); trail
/// points are offset to the body center.
pub fn draw_projectile<R: Renderer>(ball: &Projectile, field: &FieldGeometry, renderer: &mut R) {
    if let Some(trail) = ball.trail() {
        for point in trail.iter() {
            let screen = IVec2::new(
                point.x + field.body_width / 2,
                field.height as i32 - (point.y - field.body_height / 2),
            );
            renderer.draw_trail_point(screen, ball.color());
        }
    }

    let screen_pos = IVec2::new(ball.place().x, field.height as i32 - ball.place().y);
    renderer.draw(screen_pos, ball.color(), mass_alpha(ball.props().mass));
}
