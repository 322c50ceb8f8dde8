//! The closed set of animation kinds.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// One of the selectable animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    Fireworks,
    Network,
    Rain,
    Rocket,
    #[serde(alias = "bouncing_ball", alias = "bouncing-ball")]
    BouncingBall,
    Orbit,
    Vortex,
    Matrix,
}

/// Error returned when a tag does not name any [`AnimationKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown animation kind `{0}`")]
pub struct ParseKindError(pub String);

impl AnimationKind {
    /// Every kind, in the order the generate trigger draws from.
    pub const ALL: [AnimationKind; 8] = [
        AnimationKind::Fireworks,
        AnimationKind::Network,
        AnimationKind::Rain,
        AnimationKind::Rocket,
        AnimationKind::BouncingBall,
        AnimationKind::Orbit,
        AnimationKind::Vortex,
        AnimationKind::Matrix,
    ];

    /// Tag used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::Fireworks => "fireworks",
            AnimationKind::Network => "network",
            AnimationKind::Rain => "rain",
            AnimationKind::Rocket => "rocket",
            AnimationKind::BouncingBall => "bouncingBall",
            AnimationKind::Orbit => "orbit",
            AnimationKind::Vortex => "vortex",
            AnimationKind::Matrix => "matrix",
        }
    }

    /// Whether a tick paints a translucent overlay instead of clearing,
    /// leaving motion trails behind moving shapes.
    pub fn uses_trails(self) -> bool {
        matches!(
            self,
            AnimationKind::Fireworks
                | AnimationKind::Rocket
                | AnimationKind::Orbit
                | AnimationKind::Vortex
                | AnimationKind::Matrix
        )
    }

    /// Whether the kind drives a single main object instead of a collection.
    pub fn is_single_object(self) -> bool {
        matches!(self, AnimationKind::Rocket | AnimationKind::BouncingBall)
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fireworks" => Ok(AnimationKind::Fireworks),
            "network" => Ok(AnimationKind::Network),
            "rain" => Ok(AnimationKind::Rain),
            "rocket" => Ok(AnimationKind::Rocket),
            "bouncingBall" | "bouncing_ball" | "bouncing-ball" => Ok(AnimationKind::BouncingBall),
            "orbit" => Ok(AnimationKind::Orbit),
            "vortex" => Ok(AnimationKind::Vortex),
            "matrix" => Ok(AnimationKind::Matrix),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
