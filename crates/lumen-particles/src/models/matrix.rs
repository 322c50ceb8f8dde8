//! Matrix streams: columns of falling glyphs.
//!
//! Glyphs are not stored. Every render samples a fresh glyph for each
//! position in the stream, so two renders of the same state differ; this
//! flicker is the intended look.

use lumen_core::{Bounds, Rgba, Surface};
use rand::Rng;

use super::{Sprite, World};
use crate::chars::MATRIX_GLYPHS;
use crate::random::between;

/// Color of the leading glyph.
const HEAD_COLOR: Rgba = Rgba::new(0xbb as f32 / 255.0, 0xf7 as f32 / 255.0, 0xd0 as f32 / 255.0, 1.0);
/// Color of the trailing glyphs.
const TAIL_COLOR: Rgba = Rgba::new(0x22 as f32 / 255.0, 0xc5 as f32 / 255.0, 0x5e as f32 / 255.0, 1.0);

/// A vertical stream of glyphs anchored at its leading (lowest) glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    pub x: f32,
    /// Baseline of the leading glyph.
    pub y: f32,
    pub speed: f32,
    /// Number of glyphs in the stream.
    pub length: usize,
    /// Vertical distance between consecutive glyphs.
    pub spacing: f32,
}

impl Stream {
    /// Create a stream in the column at `x`, starting somewhere above the top.
    pub fn new<R: Rng + ?Sized>(x: f32, bounds: Bounds, spacing: f32, rng: &mut R) -> Self {
        Self {
            x,
            y: -between(rng, 0.0, bounds.height),
            speed: between(rng, 2.0, 7.0),
            length: rng.gen_range(10..30),
            spacing,
        }
    }

    /// Height of the whole stream.
    pub fn extent(&self) -> f32 {
        self.length as f32 * self.spacing
    }
}

impl Sprite for Stream {
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, _rng: &mut R) {
        self.y += self.speed;
        if self.y > world.bounds.height + self.extent() {
            self.y = -self.spacing;
        }
    }

    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, rng: &mut R) {
        let height = surface.height();
        for i in 0..self.length {
            let glyph = MATRIX_GLYPHS[rng.gen_range(0..MATRIX_GLYPHS.len())];
            let y = self.y - i as f32 * self.spacing;
            if y > 0.0 && y < height {
                let color = if i == 0 { HEAD_COLOR } else { TAIL_COLOR };
                surface.fill_text(glyph, self.x, y, color);
            }
        }
    }
}
