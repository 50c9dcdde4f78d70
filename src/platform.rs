/// Narrow interfaces to the platform around the simulation.
///
/// The core never blocks on, or checks the result of, a sound or a draw
/// call. Only asset loading can fail, and only at startup.

use crate::entities::{Direction, SoundCue, Sprite, SpriteKind, SpriteSheet};
use crate::error::GameError;
use crate::geometry::Vec2;

/// Window metrics, audio and input as seen from one frame.
pub trait Host {
    /// Current playfield size in world pixels.
    fn playfield_size(&self) -> (f32, f32);

    fn play_sound(&mut self, cue: SoundCue);

    /// Direction keys held this frame.
    fn direction_flags(&mut self) -> Direction;
}

pub trait Renderer {
    fn draw(&mut self, sprite: &Sprite, position: Vec2, scale: Vec2);

    /// Draw one frame of an animation strip.
    fn draw_frame(&mut self, sprite: &Sprite, frame: u32, position: Vec2, scale: Vec2) {
        let _ = frame;
        self.draw(sprite, position, scale);
    }
}

pub trait SpriteLoader {
    fn load(&mut self, kind: SpriteKind) -> Result<Sprite, GameError>;
}

/// Loader for hosts without real artwork: every sprite has its stock size.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSprites;

impl SpriteLoader for StaticSprites {
    fn load(&mut self, kind: SpriteKind) -> Result<Sprite, GameError> {
        Ok(kind.standard())
    }
}

impl SpriteSheet {
    /// Load every sprite. Any failure aborts; the game cannot start with
    /// missing art.
    pub fn load(loader: &mut impl SpriteLoader) -> Result<Self, GameError> {
        let mut get = |kind: SpriteKind| -> Result<Sprite, GameError> {
            let sprite = loader.load(kind)?;
            if sprite.width <= 0.0 || sprite.height <= 0.0 || sprite.frame_count == 0 {
                return Err(GameError::AssetUnavailable {
                    sprite: kind,
                    reason: format!(
                        "degenerate sprite {}x{} with {} frames",
                        sprite.width, sprite.height, sprite.frame_count
                    ),
                });
            }
            Ok(sprite)
        };
        Ok(Self {
            player: get(SpriteKind::Player)?,
            explosion: get(SpriteKind::Explosion)?,
            heart: get(SpriteKind::Heart)?,
            chicken: get(SpriteKind::Chicken)?,
            boss: get(SpriteKind::Boss)?,
            player_bullet: get(SpriteKind::PlayerBullet)?,
            chicken_bullet: get(SpriteKind::ChickenBullet)?,
            boss_bullet: get(SpriteKind::BossBullet)?,
            health: get(SpriteKind::Health)?,
        })
    }
}

/// Reject playfields the simulation cannot run in.
pub fn checked_playfield(host: &impl Host) -> Result<(f32, f32), GameError> {
    let (width, height) = host.playfield_size();
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Ok((width, height))
    } else {
        Err(GameError::PlayfieldUnavailable { width, height })
    }
}
