//! Vortex fragments flung outward from the center, spinning and shrinking.

use lumen_core::{Bounds, Rgba, Surface, hsl_to_rgb};
use rand::Rng;

use super::{Sprite, World};
use crate::random::{angle, between};

/// A rotating bar emitted from the surface center.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Fixed heading of the outward motion.
    pub angle: f32,
    pub size: f32,
    /// Spin of the bar itself, independent of the heading.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Rgba,
}

impl Fragment {
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        let (x, y) = bounds.center();
        Self {
            x,
            y,
            speed: between(rng, 0.5, 2.5),
            angle: angle(rng),
            size: between(rng, 1.0, 4.0),
            rotation: angle(rng),
            rotation_speed: between(rng, -0.05, 0.05),
            color: hsl_to_rgb(between(rng, 0.0, 60.0), 1.0, 0.7),
        }
    }

    /// Whether the fragment has shrunk below `min_size` and should be replaced.
    pub fn is_spent(&self, min_size: f32) -> bool {
        self.size < min_size
    }
}

impl Sprite for Fragment {
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, _rng: &mut R) {
        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed;
        self.rotation += self.rotation_speed;
        self.size *= world.settings.vortex_shrink;
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.rotation);
        surface.fill_rect(
            -self.size * 5.0,
            -self.size / 2.0,
            self.size * 10.0,
            self.size,
            self.color,
        );
        surface.restore();
    }
}
