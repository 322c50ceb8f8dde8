//! Tunable population sizes and physical constants.

use serde::Deserialize;

/// Population sizes and per-kind constants.
///
/// Defaults reproduce the classic look; every field may be overridden from
/// the `[animation]` table of the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Sparks per firework burst.
    pub firework_particles: usize,
    /// Downward acceleration added to spark velocity each tick.
    pub gravity: f32,
    /// Multiplicative opacity decay per tick.
    pub fade_speed: f32,
    /// Sparks fainter than this are removed.
    pub firework_min_life: f32,
    pub network_particles: usize,
    /// Nodes closer than this are joined by a line.
    pub connection_distance: f32,
    pub rain_particles: usize,
    pub orbit_particles: usize,
    pub vortex_particles: usize,
    /// Multiplicative size decay per tick for vortex fragments.
    pub vortex_shrink: f32,
    /// Fragments smaller than this are replaced.
    pub vortex_min_size: f32,
    pub matrix_columns: usize,
    /// Vertical distance between glyphs in a matrix stream.
    pub glyph_spacing: f32,
    pub rocket_size: f32,
    pub rocket_speed: f32,
    pub ball_size: f32,
    /// Ball velocity components are drawn from `-ball_speed..ball_speed`.
    pub ball_speed: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            firework_particles: 200,
            gravity: 0.05,
            fade_speed: 0.98,
            firework_min_life: 0.01,
            network_particles: 100,
            connection_distance: 120.0,
            rain_particles: 150,
            orbit_particles: 50,
            vortex_particles: 150,
            vortex_shrink: 0.99,
            vortex_min_size: 0.1,
            matrix_columns: 50,
            glyph_spacing: 20.0,
            rocket_size: 30.0,
            rocket_speed: 15.0,
            ball_size: 30.0,
            ball_speed: 5.0,
        }
    }
}

impl AnimationSettings {
    /// Target population for a collection kind; single-object kinds hold one.
    pub fn population(&self, kind: crate::AnimationKind) -> usize {
        use crate::AnimationKind::*;
        match kind {
            Fireworks => self.firework_particles,
            Network => self.network_particles,
            Rain => self.rain_particles,
            Orbit => self.orbit_particles,
            Vortex => self.vortex_particles,
            Matrix => self.matrix_columns,
            Rocket | BouncingBall => 1,
        }
    }
}
