//! Single main objects: the rocket and the bouncing ball.

use lumen_core::{AnimationSettings, Bounds, Rgba, Surface, hsl_to_rgb};
use rand::Rng;

use super::{Sprite, World, reflect};
use crate::random::{angle, between};

/// A large dot launched from the center in a straight line.
///
/// It has no boundary interaction and keeps flying after it leaves the
/// visible area.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Rocket {
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, settings: &AnimationSettings, rng: &mut R) -> Self {
        let (x, y) = bounds.center();
        let heading = angle(rng);
        Self {
            x,
            y,
            size: settings.rocket_size,
            vx: heading.cos() * settings.rocket_speed,
            vy: heading.sin() * settings.rocket_speed,
        }
    }
}

impl Sprite for Rocket {
    fn advance<R: Rng + ?Sized>(&mut self, _world: &World<'_>, _rng: &mut R) {
        self.x += self.vx;
        self.y += self.vy;
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.fill_circle(self.x, self.y, self.size, Rgba::WHITE);
    }
}

/// A ball bouncing around the surface, changing color on every bounce.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgba,
}

impl Ball {
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, settings: &AnimationSettings, rng: &mut R) -> Self {
        let (x, y) = bounds.center();
        let speed = settings.ball_speed;
        Self {
            x,
            y,
            size: settings.ball_size,
            vx: between(rng, -speed, speed),
            vy: between(rng, -speed, speed),
            color: random_color(rng),
        }
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    hsl_to_rgb(between(rng, 0.0, 360.0), 1.0, 0.5)
}

impl Sprite for Ball {
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, rng: &mut R) {
        let Bounds { width, height } = world.bounds;
        if reflect(self.x, &mut self.vx, self.size, width - self.size) {
            self.color = random_color(rng);
        }
        if reflect(self.y, &mut self.vy, self.size, height - self.size) {
            self.color = random_color(rng);
        }
        self.x += self.vx;
        self.y += self.vy;
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.fill_circle(self.x, self.y, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            x,
            y,
            size: 30.0,
            vx,
            vy,
            color: Rgba::WHITE,
        }
    }

    #[test]
    fn test_rocket_flies_off_surface() {
        let settings = AnimationSettings::default();
        let bounds = Bounds::new(200.0, 200.0);
        let world = World {
            bounds,
            settings: &settings,
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let mut rocket = Rocket::new(bounds, &settings, &mut rng);
        assert!(((rocket.vx.powi(2) + rocket.vy.powi(2)).sqrt() - 15.0).abs() < 1e-3);

        for _ in 0..100 {
            rocket.advance(&world, &mut rng);
        }
        let distance = ((rocket.x - 100.0).powi(2) + (rocket.y - 100.0).powi(2)).sqrt();
        assert!((distance - 1500.0).abs() < 0.5);
    }

    #[test]
    fn test_ball_bounces_and_recolors() {
        let settings = AnimationSettings::default();
        let world = World {
            bounds: Bounds::new(400.0, 300.0),
            settings: &settings,
        };
        let mut rng = SmallRng::seed_from_u64(2);

        // Touching the right edge while heading right.
        let mut b = ball(370.0, 150.0, 4.0, 0.0);
        b.advance(&world, &mut rng);
        assert_eq!(b.vx, -4.0);
        assert_eq!(b.x, 366.0);
        assert_ne!(b.color, Rgba::WHITE);

        // Touching the bottom edge while heading down.
        let mut b = ball(200.0, 270.0, 0.0, 2.0);
        b.advance(&world, &mut rng);
        assert_eq!(b.vy, -2.0);
        assert_eq!(b.y, 268.0);
    }

    #[test]
    fn test_ball_keeps_color_mid_flight() {
        let settings = AnimationSettings::default();
        let world = World {
            bounds: Bounds::new(400.0, 300.0),
            settings: &settings,
        };
        let mut b = ball(200.0, 150.0, 3.0, -3.0);
        b.advance(&world, &mut SmallRng::seed_from_u64(0));
        assert_eq!(b.color, Rgba::WHITE);
        assert_eq!((b.x, b.y), (203.0, 147.0));
    }

    proptest! {
        #[test]
        fn prop_ball_never_escapes(
            x in 30.0f32..=370.0,
            y in 30.0f32..=270.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
            seed in any::<u64>(),
        ) {
            let settings = AnimationSettings::default();
            let world = World { bounds: Bounds::new(400.0, 300.0), settings: &settings };
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut b = ball(x, y, vx, vy);
            for _ in 0..500 {
                b.advance(&world, &mut rng);
                prop_assert!(b.x - b.size >= -5.0 && b.x + b.size <= 405.0);
                prop_assert!(b.y - b.size >= -5.0 && b.y + b.size <= 305.0);
            }
        }
    }
}
