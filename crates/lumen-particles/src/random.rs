//! Sampling helpers shared by the particle constructors.

use std::f32::consts::TAU;

use rand::Rng;

/// Uniform sample in `min..max`, or `min` when the range is empty (as
/// happens on a zero-sized surface).
pub(crate) fn between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min { rng.gen_range(min..max) } else { min }
}

/// Uniform angle in radians.
pub(crate) fn angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..TAU)
}
