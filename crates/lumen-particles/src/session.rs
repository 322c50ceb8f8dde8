//! The live state of the active animation and its per-tick step.

use lumen_core::{AnimationKind, AnimationSettings, Bounds, CompositeMode, Rgba, Surface};
use rand::Rng;
use tracing::trace;

use crate::connections::draw_connections;
use crate::init::populate;
use crate::models::{
    Ball, Body, Fragment, Node, RainDrop, Rocket, Spark, Sprite, Stream, World,
};

/// Translucent dark overlay painted over the previous frame by trail kinds.
pub const TRAIL_OVERLAY: Rgba = Rgba::new(12.0 / 255.0, 12.0 / 255.0, 20.0 / 255.0, 0.1);

/// The entities of the active animation, tagged by kind.
#[derive(Debug, Clone)]
pub enum Population {
    Fireworks(Vec<Spark>),
    Network(Vec<Node>),
    Rain(Vec<RainDrop>),
    Rocket(Rocket),
    BouncingBall(Ball),
    Orbit(Vec<Body>),
    Vortex(Vec<Fragment>),
    Matrix(Vec<Stream>),
}

impl Population {
    pub fn kind(&self) -> AnimationKind {
        match self {
            Population::Fireworks(_) => AnimationKind::Fireworks,
            Population::Network(_) => AnimationKind::Network,
            Population::Rain(_) => AnimationKind::Rain,
            Population::Rocket(_) => AnimationKind::Rocket,
            Population::BouncingBall(_) => AnimationKind::BouncingBall,
            Population::Orbit(_) => AnimationKind::Orbit,
            Population::Vortex(_) => AnimationKind::Vortex,
            Population::Matrix(_) => AnimationKind::Matrix,
        }
    }

    /// Number of live entities; a main object counts as one.
    pub fn len(&self) -> usize {
        match self {
            Population::Fireworks(v) => v.len(),
            Population::Network(v) => v.len(),
            Population::Rain(v) => v.len(),
            Population::Orbit(v) => v.len(),
            Population::Vortex(v) => v.len(),
            Population::Matrix(v) => v.len(),
            Population::Rocket(_) | Population::BouncingBall(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of stepping a session by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Schedule another tick.
    Continue,
    /// The animation ended on its own.
    Finished,
}

/// The active animation: its kind and live population.
#[derive(Debug, Clone)]
pub struct Session {
    population: Population,
}

impl Session {
    /// Build a fresh session of `kind` sized to the surface.
    ///
    /// Vortex switches the surface to additive compositing; callers reset it
    /// to [`CompositeMode::SourceOver`] before starting any session.
    pub fn start<S: Surface + ?Sized, R: Rng + ?Sized>(
        kind: AnimationKind,
        surface: &mut S,
        settings: &AnimationSettings,
        rng: &mut R,
    ) -> Self {
        if kind == AnimationKind::Vortex {
            surface.set_composite(CompositeMode::Lighter);
        }
        Self {
            population: populate(kind, surface.bounds(), settings, rng),
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.population.kind()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Run one tick: paint the background, advance and draw every entity,
    /// then cull and replenish.
    pub fn step<S: Surface + ?Sized, R: Rng + ?Sized>(
        &mut self,
        surface: &mut S,
        bounds: Bounds,
        settings: &AnimationSettings,
        rng: &mut R,
    ) -> StepOutcome {
        if self.kind().uses_trails() {
            surface.fill_rect(0.0, 0.0, bounds.width, bounds.height, TRAIL_OVERLAY);
        } else {
            surface.clear_rect(0.0, 0.0, bounds.width, bounds.height);
        }

        let world = World { bounds, settings };
        match &mut self.population {
            Population::Fireworks(sparks) => {
                sparks.retain_mut(|spark| {
                    spark.advance(&world, rng);
                    spark.render(surface, rng);
                    !spark.is_spent(settings.firework_min_life)
                });
                trace!(sparks = sparks.len(), "fireworks tick");
                if sparks.is_empty() {
                    return StepOutcome::Finished;
                }
            }
            Population::Network(nodes) => {
                advance_all(nodes, &world, surface, rng);
                draw_connections(nodes, settings.connection_distance, surface);
            }
            Population::Rain(drops) => advance_all(drops, &world, surface, rng),
            Population::Rocket(rocket) => {
                rocket.advance(&world, rng);
                rocket.render(surface, rng);
            }
            Population::BouncingBall(ball) => {
                ball.advance(&world, rng);
                ball.render(surface, rng);
            }
            Population::Orbit(bodies) => advance_all(bodies, &world, surface, rng),
            Population::Vortex(fragments) => {
                fragments.retain_mut(|fragment| {
                    fragment.advance(&world, rng);
                    fragment.render(surface, rng);
                    !fragment.is_spent(settings.vortex_min_size)
                });
                // One replacement per tick, never a burst refill.
                if fragments.len() < settings.vortex_particles {
                    fragments.push(Fragment::new(bounds, rng));
                }
            }
            Population::Matrix(streams) => advance_all(streams, &world, surface, rng),
        }
        StepOutcome::Continue
    }
}

fn advance_all<T, S, R>(entities: &mut [T], world: &World<'_>, surface: &mut S, rng: &mut R)
where
    T: Sprite,
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    for entity in entities {
        entity.advance(world, rng);
        entity.render(surface, rng);
    }
}
