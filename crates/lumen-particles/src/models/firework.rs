//! Firework sparks: a radial burst pulled down by gravity while fading out.

use lumen_core::{Rgba, Surface};
use rand::Rng;

use super::{Sprite, World};
use crate::random::{angle, between};

/// A single spark of a firework burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    /// Opacity; decays exponentially and never reaches zero.
    pub life: f32,
}

impl Spark {
    /// Create a spark at the burst origin with a random heading and speed.
    pub fn new<R: Rng + ?Sized>(x: f32, y: f32, rng: &mut R) -> Self {
        let size = between(rng, 1.0, 6.0);
        let heading = angle(rng);
        let speed = between(rng, 2.0, 9.0);
        Self {
            x,
            y,
            size,
            vx: heading.cos() * speed,
            vy: heading.sin() * speed,
            life: 1.0,
        }
    }

    /// Whether the spark has faded below `min_life` and should be removed.
    pub fn is_spent(&self, min_life: f32) -> bool {
        self.life < min_life
    }
}

impl Sprite for Spark {
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, _rng: &mut R) {
        self.vy += world.settings.gravity;
        self.x += self.vx;
        self.y += self.vy;
        self.life *= world.settings.fade_speed;
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.fill_circle(self.x, self.y, self.size, Rgba::WHITE.with_alpha(self.life));
    }
}
