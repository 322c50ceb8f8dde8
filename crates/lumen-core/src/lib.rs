//! Core types shared by the lumen crates.
//!
//! Holds the closed set of animation kinds, the color type, the drawing
//! surface port the engine renders through, and the tunable settings.

mod color;
mod kind;
mod settings;
mod surface;

pub use color::{Rgba, hsl_to_rgb};
pub use kind::{AnimationKind, ParseKindError};
pub use settings::AnimationSettings;
pub use surface::{Bounds, CompositeMode, Surface};
