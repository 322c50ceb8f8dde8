//! The drawing surface the animations render onto.

use crate::Rgba;

/// How new paint combines with what is already on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Normal alpha blending.
    #[default]
    SourceOver,
    /// Additive blending: overlapping paint brightens.
    Lighter,
}

/// Width and height of the drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Drawing primitives the engine calls each tick.
///
/// Coordinates are logical pixels with the origin at the top left. Shapes
/// pass through the current transform, which `save`/`restore` push and pop.
/// The composite mode is surface-wide state and is not saved.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn bounds(&self) -> Bounds {
        Bounds::new(self.width(), self.height())
    }

    /// Reset a region to fully transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgba);

    /// Draw a single glyph with its baseline at `y`.
    fn fill_text(&mut self, glyph: char, x: f32, y: f32, color: Rgba);

    fn set_composite(&mut self, mode: CompositeMode);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Rotate subsequent drawing by `angle` radians, clockwise on screen.
    fn rotate(&mut self, angle: f32);
}
