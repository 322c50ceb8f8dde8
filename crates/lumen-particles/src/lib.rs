//! Particle animation engine for lumen.
//!
//! An animation is a [`Session`]: a kind plus the live particles (or the
//! single main object) for that kind. The [`Controller`] owns at most one
//! session, drives it one tick at a time through an injected
//! [`FrameScheduler`], and reacts to the generate and resize triggers.

mod chars;
mod connections;
mod controller;
mod init;
pub mod models;
mod random;
mod scheduler;
mod session;

#[cfg(test)]
mod testing;

pub use chars::MATRIX_GLYPHS;
pub use connections::{connection_opacity, draw_connections};
pub use controller::{Controller, LoopState};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use session::{Population, Session, StepOutcome, TRAIL_OVERLAY};
