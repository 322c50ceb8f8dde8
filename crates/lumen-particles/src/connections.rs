//! Lines between nearby network nodes.

use lumen_core::{Rgba, Surface};

use crate::models::Node;

/// Opacity of the line joining two nodes `distance` apart, or `None` when
/// they are too far apart to be connected. Falls off linearly from 1.0 at
/// zero distance to nothing at `threshold` (exclusive).
pub fn connection_opacity(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold).then(|| 1.0 - distance / threshold)
}

/// Join every pair of nodes closer than `threshold` with a faint line.
///
/// Checks every unordered pair, so the cost is quadratic in the number of
/// nodes; fine for the default population of 100.
pub fn draw_connections<S: Surface + ?Sized>(nodes: &[Node], threshold: f32, surface: &mut S) {
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let dx = a.x - b.x;
            let dy = a.y - b.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if let Some(opacity) = connection_opacity(distance, threshold) {
                surface.stroke_line((a.x, a.y), (b.x, b.y), 1.0, Rgba::WHITE.with_alpha(opacity));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCommand, RecordingSurface};

    fn node(x: f32, y: f32) -> Node {
        Node {
            x,
            y,
            size: 1.0,
            vx: 0.0,
            vy: 0.0,
        }
    }

    #[test]
    fn test_opacity_falloff() {
        assert_eq!(connection_opacity(0.0, 120.0), Some(1.0));
        assert_eq!(connection_opacity(60.0, 120.0), Some(0.5));
        assert_eq!(connection_opacity(120.0, 120.0), None);
        assert_eq!(connection_opacity(500.0, 120.0), None);
    }

    #[test]
    fn test_no_line_at_threshold() {
        let mut surface = RecordingSurface::new(500.0, 500.0);
        draw_connections(&[node(0.0, 0.0), node(120.0, 0.0)], 120.0, &mut surface);
        assert!(surface.lines().is_empty());
    }

    #[test]
    fn test_lines_for_close_pairs_only() {
        let mut surface = RecordingSurface::new(500.0, 500.0);
        let nodes = [node(0.0, 0.0), node(30.0, 40.0), node(400.0, 400.0)];
        draw_connections(&nodes, 120.0, &mut surface);

        assert_eq!(
            surface.lines(),
            vec![&DrawCommand::Line {
                from: (0.0, 0.0),
                to: (30.0, 40.0),
                color: Rgba::WHITE.with_alpha(1.0 - 50.0 / 120.0),
            }]
        );
    }

    #[test]
    fn test_each_pair_drawn_once() {
        let mut surface = RecordingSurface::new(500.0, 500.0);
        let nodes: Vec<_> = (0..5).map(|i| node(i as f32, 0.0)).collect();
        draw_connections(&nodes, 120.0, &mut surface);
        assert_eq!(surface.lines().len(), 10);
    }
}
