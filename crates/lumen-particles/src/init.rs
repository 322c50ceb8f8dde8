//! Builders for the initial population of each animation kind.

use lumen_core::{AnimationKind, AnimationSettings, Bounds};
use rand::Rng;

use crate::models::{Ball, Body, Fragment, Node, RainDrop, Rocket, Spark, Stream};
use crate::session::Population;

/// Build a fresh population for `kind` sized to `bounds`.
pub(crate) fn populate<R: Rng + ?Sized>(
    kind: AnimationKind,
    bounds: Bounds,
    settings: &AnimationSettings,
    rng: &mut R,
) -> Population {
    let count = settings.population(kind);
    match kind {
        AnimationKind::Fireworks => {
            let (x, y) = bounds.center();
            Population::Fireworks((0..count).map(|_| Spark::new(x, y, rng)).collect())
        }
        AnimationKind::Network => {
            Population::Network((0..count).map(|_| Node::new(bounds, rng)).collect())
        }
        AnimationKind::Rain => Population::Rain((0..count).map(|_| RainDrop::new(bounds, rng)).collect()),
        AnimationKind::Rocket => Population::Rocket(Rocket::new(bounds, settings, rng)),
        AnimationKind::BouncingBall => Population::BouncingBall(Ball::new(bounds, settings, rng)),
        AnimationKind::Orbit => Population::Orbit((0..count).map(|_| Body::new(bounds, rng)).collect()),
        AnimationKind::Vortex => {
            Population::Vortex((0..count).map(|_| Fragment::new(bounds, rng)).collect())
        }
        AnimationKind::Matrix => {
            let column_width = bounds.width / count.max(1) as f32;
            Population::Matrix(
                (0..count)
                    .map(|i| Stream::new(i as f32 * column_width, bounds, settings.glyph_spacing, rng))
                    .collect(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn test_population_sizes_match_settings() {
        let settings = AnimationSettings::default();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = SmallRng::seed_from_u64(0);
        for kind in AnimationKind::ALL {
            let population = populate(kind, bounds, &settings, &mut rng);
            assert_eq!(population.kind(), kind);
            assert_eq!(population.len(), settings.population(kind), "{kind}");
        }
    }

    #[test]
    fn test_matrix_columns_span_width() {
        let settings = AnimationSettings::default();
        let mut rng = SmallRng::seed_from_u64(0);
        let Population::Matrix(streams) =
            populate(AnimationKind::Matrix, Bounds::new(500.0, 300.0), &settings, &mut rng)
        else {
            panic!("expected matrix streams");
        };
        assert_eq!(streams[0].x, 0.0);
        assert_eq!(streams[1].x, 10.0);
        assert_eq!(streams[49].x, 490.0);
        assert!(streams.iter().all(|s| s.y <= 0.0 && s.y > -300.0));
    }

    #[test]
    fn test_fireworks_burst_from_center() {
        let settings = AnimationSettings::default();
        let mut rng = SmallRng::seed_from_u64(0);
        let Population::Fireworks(sparks) =
            populate(AnimationKind::Fireworks, Bounds::new(500.0, 300.0), &settings, &mut rng)
        else {
            panic!("expected sparks");
        };
        assert!(sparks.iter().all(|s| s.x == 250.0 && s.y == 150.0));
    }
}
