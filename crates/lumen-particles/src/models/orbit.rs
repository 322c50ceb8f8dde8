//! Bodies circling the surface center on fixed radii.

use lumen_core::{Bounds, Rgba, Surface, hsl_to_rgb};
use rand::Rng;

use super::{Sprite, World};
use crate::random::{angle, between};

/// Smallest orbit radius.
const MIN_RADIUS: f32 = 20.0;

/// A body on a circular orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub angle: f32,
    /// Angular speed in radians per tick.
    pub speed: f32,
    pub size: f32,
    pub color: Rgba,
    pub x: f32,
    pub y: f32,
}

impl Body {
    /// Create a body orbiting the surface midpoint at a random radius.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let (center_x, center_y) = bounds.center();
        let max_radius = bounds.width.min(bounds.height) / 2.0;
        let mut body = Self {
            center_x,
            center_y,
            radius: between(rng, MIN_RADIUS, max_radius),
            angle: angle(rng),
            speed: between(rng, 0.01, 0.03),
            size: between(rng, 1.0, 4.0),
            color: hsl_to_rgb(between(rng, 200.0, 260.0), 1.0, 0.7),
            x: center_x,
            y: center_y,
        };
        body.place();
        body
    }

    fn place(&mut self) {
        self.x = self.center_x + self.angle.cos() * self.radius;
        self.y = self.center_y + self.angle.sin() * self.radius;
    }
}

impl Sprite for Body {
    fn advance<R: Rng + ?Sized>(&mut self, _world: &World<'_>, _rng: &mut R) {
        self.angle += self.speed;
        self.place();
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.fill_circle(self.x, self.y, self.size, self.color);
    }
}
