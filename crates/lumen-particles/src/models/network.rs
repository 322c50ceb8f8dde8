//! Network nodes drifting in straight lines and bouncing off the edges.

use lumen_core::{Bounds, Rgba, Surface};
use rand::Rng;

use super::{Sprite, World, reflect};
use crate::random::between;

/// A node of the network animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Node {
    /// Create a node at a random position with a random slow drift.
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            x: between(rng, 0.0, bounds.width),
            y: between(rng, 0.0, bounds.height),
            size: between(rng, 1.0, 4.0),
            vx: between(rng, -1.0, 1.0),
            vy: between(rng, -1.0, 1.0),
        }
    }
}

impl Sprite for Node {
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, _rng: &mut R) {
        reflect(self.x, &mut self.vx, 0.0, world.bounds.width);
        reflect(self.y, &mut self.vy, 0.0, world.bounds.height);
        self.x += self.vx;
        self.y += self.vy;
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, _rng: &mut R) {
        surface.fill_circle(self.x, self.y, self.size, Rgba::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use lumen_core::AnimationSettings;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    fn step(node: &mut Node, width: f32, height: f32) {
        let settings = AnimationSettings::default();
        let world = World {
            bounds: Bounds::new(width, height),
            settings: &settings,
        };
        node.advance(&world, &mut SmallRng::seed_from_u64(0));
    }

    #[test]
    fn test_reflects_at_right_edge() {
        let mut node = Node {
            x: 200.0,
            y: 50.0,
            size: 1.0,
            vx: 0.75,
            vy: 0.0,
        };
        step(&mut node, 200.0, 100.0);
        assert_eq!(node.vx, -0.75);
        assert_eq!(node.x, 199.25);
    }

    #[test]
    fn test_reflects_at_top_edge() {
        let mut node = Node {
            x: 50.0,
            y: 0.0,
            size: 1.0,
            vx: 0.0,
            vy: -0.5,
        };
        step(&mut node, 200.0, 100.0);
        assert_eq!(node.vy, 0.5);
        assert_eq!(node.y, 0.5);
    }

    proptest! {
        #[test]
        fn prop_stays_in_bounds(
            x in 0.0f32..=300.0,
            y in 0.0f32..=200.0,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
        ) {
            let mut node = Node { x, y, size: 1.0, vx, vy };
            for _ in 0..500 {
                step(&mut node, 300.0, 200.0);
                prop_assert!(node.x >= -1.0 && node.x <= 301.0);
                prop_assert!(node.y >= -1.0 && node.y <= 201.0);
            }
        }
    }
}
