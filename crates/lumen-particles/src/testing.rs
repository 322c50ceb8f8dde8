//! A surface that records draw calls instead of rasterizing them.

use lumen_core::{CompositeMode, Rgba, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect,
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
    FillCircle { x: f32, y: f32, radius: f32, color: Rgba },
    Line { from: (f32, f32), to: (f32, f32), color: Rgba },
    Text { glyph: char, x: f32, y: f32, color: Rgba },
    Composite(CompositeMode),
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub composite: CompositeMode,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn lines(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
        self.commands.push(DrawCommand::ClearRect);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.commands
            .push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), _width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_text(&mut self, glyph: char, x: f32, y: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text { glyph, x, y, color });
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
        self.commands.push(DrawCommand::Composite(mode));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(DrawCommand::Translate(dx, dy));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
