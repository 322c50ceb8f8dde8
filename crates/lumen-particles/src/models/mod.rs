//! Particle and main-object models, one module per animation kind.
//!
//! Every model implements [`Sprite`]: `advance` mutates only its own fields
//! and `render` only writes to the surface.

use lumen_core::{AnimationSettings, Bounds, Surface};
use rand::Rng;

mod firework;
mod main_object;
mod matrix;
mod network;
mod orbit;
mod rain;
mod vortex;

pub use firework::Spark;
pub use main_object::{Ball, Rocket};
pub use matrix::Stream;
pub use network::Node;
pub use orbit::Body;
pub use rain::RainDrop;
pub use vortex::Fragment;

/// Read-only environment handed to every `advance` call.
#[derive(Debug, Clone, Copy)]
pub struct World<'a> {
    pub bounds: Bounds,
    pub settings: &'a AnimationSettings,
}

/// The two operations every animated entity supports.
pub trait Sprite {
    /// Advance one tick.
    fn advance<R: Rng + ?Sized>(&mut self, world: &World<'_>, rng: &mut R);

    /// Draw the entity at its current position.
    fn render<S: Surface + ?Sized, R: Rng + ?Sized>(&self, surface: &mut S, rng: &mut R);
}

/// Flip `velocity` when `position` sits on or past an edge of `min..=max`
/// and is still heading outward. Returns whether a flip happened.
pub(crate) fn reflect(position: f32, velocity: &mut f32, min: f32, max: f32) -> bool {
    let outward = (position >= max && *velocity > 0.0) || (position <= min && *velocity < 0.0);
    if outward {
        *velocity = -*velocity;
    }
    outward
}
