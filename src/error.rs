use std::fmt;

use crate::entities::SpriteKind;

/// Startup failures. Nothing in the per-frame simulation returns an error.
#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    AssetUnavailable { sprite: SpriteKind, reason: String },
    PlayfieldUnavailable { width: f32, height: f32 },
    InvalidConfig { field: &'static str, reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetUnavailable { sprite, reason } => {
                write!(f, "sprite {sprite:?} unavailable: {reason}")
            }
            Self::PlayfieldUnavailable { width, height } => {
                write!(f, "unusable playfield size: {width}x{height}")
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}
