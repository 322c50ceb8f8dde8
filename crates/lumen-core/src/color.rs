//! Color type and conversions.

use ratatui::style::Color;

/// Straight (non-premultiplied) RGBA color with float channels in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels and a float alpha, like CSS `rgba()`.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::Rgb(to_u8(c.r), to_u8(c.g), to_u8(c.b))
    }
}

/// Convert HSL (hue in degrees, saturation and lightness in 0.0-1.0) to an
/// opaque color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgba {
    if s == 0.0 {
        return Rgba::new(l, l, l, 1.0);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgba::new(r, g, b, 1.0)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(approx(hsl_to_rgb(0.0, 1.0, 0.5), Rgba::new(1.0, 0.0, 0.0, 1.0)));
        assert!(approx(hsl_to_rgb(120.0, 1.0, 0.5), Rgba::new(0.0, 1.0, 0.0, 1.0)));
        assert!(approx(hsl_to_rgb(240.0, 1.0, 0.5), Rgba::new(0.0, 0.0, 1.0, 1.0)));
        assert!(approx(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5)));
    }

    #[test]
    fn test_into_terminal_color() {
        assert_eq!(Color::from(Rgba::from_rgb8(12, 12, 20, 0.1)), Color::Rgb(12, 12, 20));
        assert_eq!(Color::from(Rgba::WHITE), Color::Rgb(255, 255, 255));
    }
}
