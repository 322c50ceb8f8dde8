//! Terminal-backed drawing surface.
//!
//! Each terminal cell holds two square sub-pixels stacked vertically and is
//! drawn with an upper half block: the foreground paints the top sub-pixel
//! and the background the bottom one. Text goes to a separate glyph layer
//! with one glyph per cell.

use std::ops::Range;

use lumen_core::{CompositeMode, Rgba, Surface};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Color of a cleared surface.
const BACKGROUND: [f32; 3] = [12.0 / 255.0, 12.0 / 255.0, 20.0 / 255.0];

/// Glyphs whose color is this close to the cell beneath are dropped.
const GLYPH_FADE_EPSILON: f32 = 0.04;

/// 2D affine transform `(x, y) -> (a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.e += self.a * dx + self.c * dy;
        self.f += self.b * dx + self.d * dy;
    }

    fn rotate(&mut self, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let Transform { a, b, c, d, .. } = *self;
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    fn inverse(&self) -> Option<Transform> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f32::EPSILON {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Transform {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: [f32; 3],
}

/// Pixel buffer sized to the terminal.
#[derive(Debug)]
pub struct PixelSurface {
    cols: u16,
    rows: u16,
    /// Logical pixels per terminal column.
    cell_width: f32,
    /// Logical pixels per terminal row.
    cell_height: f32,
    /// `cols` x `rows * 2` sub-pixels, row major.
    pixels: Vec<[f32; 3]>,
    /// One optional glyph per cell, row major.
    glyphs: Vec<Option<Glyph>>,
    composite: CompositeMode,
    transform: Transform,
    saved: Vec<Transform>,
}

impl PixelSurface {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        let mut surface = Self {
            cols: 0,
            rows: 0,
            cell_width,
            cell_height,
            pixels: Vec::new(),
            glyphs: Vec::new(),
            composite: CompositeMode::SourceOver,
            transform: Transform::IDENTITY,
            saved: Vec::new(),
        };
        surface.resize(cols, rows);
        surface
    }

    /// Resize to a new terminal size, discarding the current contents.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        let cells = cols as usize * rows as usize;
        self.pixels = vec![BACKGROUND; cells * 2];
        self.glyphs = vec![None; cells];
    }

    fn pixel_width(&self) -> f32 {
        self.cell_width
    }

    fn pixel_height(&self) -> f32 {
        self.cell_height / 2.0
    }

    fn pixel_rows(&self) -> usize {
        self.rows as usize * 2
    }

    /// Sub-pixel index under a logical device-space point.
    fn pixel_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let px = (x / self.pixel_width()).floor();
        let py = (y / self.pixel_height()).floor();
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let (px, py) = (px as usize, py as usize);
        (px < self.cols as usize && py < self.pixel_rows()).then_some((px, py))
    }

    fn pixel_center(&self, px: usize, py: usize) -> (f32, f32) {
        (
            (px as f32 + 0.5) * self.pixel_width(),
            (py as f32 + 0.5) * self.pixel_height(),
        )
    }

    /// Sub-pixel index range covering a device-space bounding box.
    fn pixel_span(&self, min: (f32, f32), max: (f32, f32)) -> (Range<usize>, Range<usize>) {
        let cols = self.cols as usize;
        let rows = self.pixel_rows();
        if cols == 0 || rows == 0 {
            return (0..0, 0..0);
        }
        let clamp = |v: f32, size: f32, last: usize| -> usize {
            ((v / size).floor().max(0.0) as usize).min(last)
        };
        let (w, h) = (self.pixel_width(), self.pixel_height());
        (
            clamp(min.0, w, cols)..clamp(max.0, w, cols - 1) + 1,
            clamp(min.1, h, rows)..clamp(max.1, h, rows - 1) + 1,
        )
    }

    fn blend(&mut self, px: usize, py: usize, color: Rgba, coverage: f32) {
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = py * self.cols as usize + px;
        let src = [color.r, color.g, color.b];
        self.pixels[idx] = composite(self.composite, self.pixels[idx], src, alpha);

        // Text fades along with the top half of its cell.
        if py % 2 == 0 {
            let cell = (py / 2) * self.cols as usize + px;
            if let Some(glyph) = self.glyphs[cell].as_mut() {
                glyph.color = composite(self.composite, glyph.color, src, alpha);
                let under = self.pixels[idx];
                let faded = glyph
                    .color
                    .iter()
                    .zip(under)
                    .all(|(g, p)| (g - p).abs() < GLYPH_FADE_EPSILON);
                if faded {
                    self.glyphs[cell] = None;
                }
            }
        }
    }

    /// Paint every sub-pixel whose center satisfies `inside` (tested in
    /// local coordinates), or the sub-pixel under `anchor` with partial
    /// coverage when the shape is too small to contain any center.
    fn fill_shape(
        &mut self,
        local_corners: [(f32, f32); 4],
        anchor: (f32, f32),
        area: f32,
        color: Rgba,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        let Some(inverse) = self.transform.inverse() else {
            return;
        };
        let corners = local_corners.map(|(x, y)| self.transform.apply(x, y));
        let min = corners
            .iter()
            .fold((f32::MAX, f32::MAX), |acc, p| (acc.0.min(p.0), acc.1.min(p.1)));
        let max = corners
            .iter()
            .fold((f32::MIN, f32::MIN), |acc, p| (acc.0.max(p.0), acc.1.max(p.1)));

        let (xs, ys) = self.pixel_span(min, max);
        let mut hits = 0;
        for py in ys {
            for px in xs.clone() {
                let (cx, cy) = self.pixel_center(px, py);
                let (lx, ly) = inverse.apply(cx, cy);
                if inside(lx, ly) {
                    self.blend(px, py, color, 1.0);
                    hits += 1;
                }
            }
        }

        if hits == 0 {
            let (ax, ay) = self.transform.apply(anchor.0, anchor.1);
            if let Some((px, py)) = self.pixel_at(ax, ay) {
                let coverage = area / (self.pixel_width() * self.pixel_height());
                self.blend(px, py, color, coverage.min(1.0));
            }
        }
    }

    /// Color of a sub-pixel, for inspection.
    pub fn pixel(&self, px: usize, py: usize) -> Option<Rgba> {
        (px < self.cols as usize && py < self.pixel_rows()).then(|| {
            let [r, g, b] = self.pixels[py * self.cols as usize + px];
            Rgba::new(r, g, b, 1.0)
        })
    }

    /// Glyph drawn in a cell, if any.
    pub fn glyph(&self, col: u16, row: u16) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.glyphs[row as usize * self.cols as usize + col as usize].map(|g| g.ch)
    }
}

fn composite(mode: CompositeMode, dst: [f32; 3], src: [f32; 3], alpha: f32) -> [f32; 3] {
    let mut out = dst;
    for (o, s) in out.iter_mut().zip(src) {
        *o = match mode {
            CompositeMode::SourceOver => *o * (1.0 - alpha) + s * alpha,
            CompositeMode::Lighter => (*o + s * alpha).min(1.0),
        };
    }
    out
}

fn to_color(rgb: [f32; 3]) -> Color {
    Rgba::new(rgb[0], rgb[1], rgb[2], 1.0).into()
}

impl Surface for PixelSurface {
    fn width(&self) -> f32 {
        self.cols as f32 * self.cell_width
    }

    fn height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x0, y0) = self.transform.apply(x, y);
        let (x1, y1) = self.transform.apply(x + w, y + h);
        let (xs, ys) = self.pixel_span((x0.min(x1), y0.min(y1)), (x0.max(x1), y0.max(y1)));
        let cols = self.cols as usize;
        for py in ys {
            for px in xs.clone() {
                self.pixels[py * cols + px] = BACKGROUND;
                self.glyphs[(py / 2) * cols + px] = None;
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let (x0, x1) = if w < 0.0 { (x + w, x) } else { (x, x + w) };
        let (y0, y1) = if h < 0.0 { (y + h, y) } else { (y, y + h) };
        self.fill_shape(
            [(x0, y0), (x1, y0), (x0, y1), (x1, y1)],
            ((x0 + x1) / 2.0, (y0 + y1) / 2.0),
            (x1 - x0) * (y1 - y0),
            color,
            |lx, ly| lx >= x0 && lx < x1 && ly >= y0 && ly < y1,
        );
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let r = radius.abs();
        self.fill_shape(
            [(x - r, y - r), (x + r, y - r), (x - r, y + r), (x + r, y + r)],
            (x, y),
            std::f32::consts::PI * r * r,
            color,
            |lx, ly| (lx - x).powi(2) + (ly - y).powi(2) <= r * r,
        );
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), _width: f32, color: Rgba) {
        let (x0, y0) = self.transform.apply(from.0, from.1);
        let (x1, y1) = self.transform.apply(to.0, to.1);
        // Walk the line in sub-pixel units so every covered sub-pixel is hit.
        let dx = (x1 - x0) / self.pixel_width();
        let dy = (y1 - y0) / self.pixel_height();
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        let mut last = None;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let point = self.pixel_at(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
            if point == last {
                continue;
            }
            if let Some((px, py)) = point {
                self.blend(px, py, color, 1.0);
            }
            last = point;
        }
    }

    fn fill_text(&mut self, glyph: char, x: f32, y: f32, color: Rgba) {
        let (x, y) = self.transform.apply(x, y);
        // The glyph sits in the cell whose bottom edge is at or below the baseline.
        let col = (x / self.cell_width).floor();
        let row = (y / self.cell_height).ceil() - 1.0;
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        let under = self.pixels[row * 2 * self.cols as usize + col];
        let color = composite(CompositeMode::SourceOver, under, [color.r, color.g, color.b], color.a);
        self.glyphs[row * self.cols as usize + col] = Some(Glyph { ch: glyph, color });
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn rotate(&mut self, angle: f32) {
        self.transform.rotate(angle);
    }
}

impl Widget for &PixelSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = self.cols as usize;
        for row in 0..self.rows.min(area.height) {
            for col in 0..self.cols.min(area.width) {
                let (c, r) = (col as usize, row as usize);
                let top = self.pixels[r * 2 * cols + c];
                let bottom = self.pixels[(r * 2 + 1) * cols + c];
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                match self.glyphs[r * cols + c] {
                    Some(glyph) => {
                        let mid = [
                            (top[0] + bottom[0]) / 2.0,
                            (top[1] + bottom[1]) / 2.0,
                            (top[2] + bottom[2]) / 2.0,
                        ];
                        cell.set_char(glyph.ch)
                            .set_fg(to_color(glyph.color))
                            .set_bg(to_color(mid));
                    }
                    None => {
                        cell.set_char('▀').set_fg(to_color(top)).set_bg(to_color(bottom));
                    }
                }
            }
        }
    }
}
