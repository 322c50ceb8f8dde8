//! Rain drops falling at a constant speed and wrapping to the top.

use lumen_core::{Bounds, Rgba, Surface};
use rand::Rng;

use super::{Sprite, World};
use crate::random::between;

const DROP_COLOR: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.7);

/// A single rain drop, drawn as a thin vertical streak.
#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

impl RainDrop {
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            x: between(rng, 0.0, bounds.width),
            y: between(rng, 0.0, bounds.height),
            size: between(rng, 1.0, 3.0),
            speed: between(rng, 1.0, 4.0),
        }
    }
}

impl Sprite for RainDrop {
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, rng: &mut R) {
        self.y += self.speed;
        if self.y > world.bounds.height {
            // Restart just above the top edge so the streak slides in.
            self.y = -self.size;
            self.x = between(rng, 0.0, world.bounds.width);
        }
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.fill_rect(self.x, self.y, self.size, self.size * 5.0, DROP_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use lumen_core::AnimationSettings;
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::testing::{DrawCommand, RecordingSurface};

    #[test]
    fn test_wraps_below_bottom() {
        let settings = AnimationSettings::default();
        let world = World {
            bounds: Bounds::new(400.0, 300.0),
            settings: &settings,
        };
        let mut rng = SmallRng::seed_from_u64(11);
        let mut drop = RainDrop {
            x: 123.0,
            y: 301.0,
            size: 2.0,
            speed: 3.0,
        };
        drop.advance(&world, &mut rng);
        assert!(drop.y < 0.0);
        assert_eq!(drop.y, -2.0);
        assert_ne!(drop.x, 123.0);
        assert!((0.0..400.0).contains(&drop.x));
    }

    #[test]
    fn test_falls_at_constant_speed() {
        let settings = AnimationSettings::default();
        let world = World {
            bounds: Bounds::new(400.0, 300.0),
            settings: &settings,
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let mut drop = RainDrop {
            x: 10.0,
            y: 0.0,
            size: 1.0,
            speed: 2.5,
        };
        for _ in 0..4 {
            drop.advance(&world, &mut rng);
        }
        assert_eq!((drop.x, drop.y), (10.0, 10.0));
    }

    #[test]
    fn test_render_streak_is_five_times_taller() {
        let mut surface = RecordingSurface::new(400.0, 300.0);
        let drop = RainDrop {
            x: 5.0,
            y: 6.0,
            size: 2.0,
            speed: 1.0,
        };
        drop.render(&mut surface, &mut SmallRng::seed_from_u64(0));
        assert_eq!(
            surface.commands,
            vec![DrawCommand::FillRect {
                x: 5.0,
                y: 6.0,
                w: 2.0,
                h: 10.0,
                color: DROP_COLOR,
            }]
        );
    }
}
