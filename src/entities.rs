/// All game entity types: plain data plus a few read-only helpers.

use crate::config::Tunables;
use crate::explosion::ExplosionState;
use crate::geometry::{BoundingBox, Vec2};

// ── Visuals ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Explosion,
    Heart,
    Chicken,
    Boss,
    PlayerBullet,
    ChickenBullet,
    BossBullet,
    Health,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 9] = [
        SpriteKind::Player,
        SpriteKind::Explosion,
        SpriteKind::Heart,
        SpriteKind::Chicken,
        SpriteKind::Boss,
        SpriteKind::PlayerBullet,
        SpriteKind::ChickenBullet,
        SpriteKind::BossBullet,
        SpriteKind::Health,
    ];

    /// Unscaled pixel size and frame count of the stock artwork.
    pub fn standard(self) -> Sprite {
        let (width, height, frame_count) = match self {
            SpriteKind::Player => (64.0, 64.0, 1),
            SpriteKind::Explosion => (128.0, 128.0, 16),
            SpriteKind::Heart => (256.0, 256.0, 1),
            SpriteKind::Chicken => (160.0, 140.0, 1),
            SpriteKind::Boss => (240.0, 180.0, 1),
            SpriteKind::PlayerBullet => (80.0, 160.0, 1),
            SpriteKind::ChickenBullet => (80.0, 80.0, 1),
            SpriteKind::BossBullet => (120.0, 120.0, 1),
            SpriteKind::Health => (48.0, 48.0, 1),
        };
        Sprite {
            kind: self,
            width,
            height,
            frame_count,
        }
    }
}

/// Handle to loaded artwork. The core only cares about its extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub width: f32,
    pub height: f32,
    /// Animation frames in the strip; 1 for still images.
    pub frame_count: u32,
}

impl Sprite {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Every sprite the game draws, loaded once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteSheet {
    pub player: Sprite,
    pub explosion: Sprite,
    pub heart: Sprite,
    pub chicken: Sprite,
    pub boss: Sprite,
    pub player_bullet: Sprite,
    pub chicken_bullet: Sprite,
    pub boss_bullet: Sprite,
    pub health: Sprite,
}

impl SpriteSheet {
    pub fn standard() -> Self {
        Self {
            player: SpriteKind::Player.standard(),
            explosion: SpriteKind::Explosion.standard(),
            heart: SpriteKind::Heart.standard(),
            chicken: SpriteKind::Chicken.standard(),
            boss: SpriteKind::Boss.standard(),
            player_bullet: SpriteKind::PlayerBullet.standard(),
            chicken_bullet: SpriteKind::ChickenBullet.standard(),
            boss_bullet: SpriteKind::BossBullet.standard(),
            health: SpriteKind::Health.standard(),
        }
    }
}

// ── Shared entity shape ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Top-left corner in world space.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    pub scale: Vec2,
    pub sprite: Sprite,
}

impl Entity {
    pub fn new(sprite: Sprite, position: Vec2, velocity: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            velocity,
            scale,
            sprite,
        }
    }

    /// On-screen size after scaling.
    pub fn extent(&self) -> Vec2 {
        self.sprite.size().scaled_by(self.scale)
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_extent(self.position, self.extent())
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletKind {
    /// Fired by the player; hurts chickens and the boss.
    Player,
    /// Fired by a chicken or the boss; hurts the player.
    Hostile,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub body: Entity,
    pub kind: BulletKind,
}

// ── Enemies & pickups ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Chicken,
    Boss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Entity,
    pub kind: EnemyKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Health {
    pub body: Entity,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionState {
    #[default]
    Stopped,
    Moving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Entity,
    pub lives: u32,
    pub explosion: ExplosionState,
    /// Where the last explosion happened; the player itself is already back
    /// at the spawn point by then.
    pub blast_origin: Vec2,
    pub motion: MotionState,
    /// Ticks since the last engine cue.
    pub cue_timer: u32,
}

impl Player {
    pub fn is_exploding(&self) -> bool {
        self.explosion.is_exploding()
    }
}

/// Held direction keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    pub const NONE: Direction = Direction(0);
    pub const FORWARD: Direction = Direction(1);
    pub const BACKWARD: Direction = Direction(2);
    pub const LEFT: Direction = Direction(4);
    pub const RIGHT: Direction = Direction(8);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Direction(bits & 0b1111)
    }

    pub const fn contains(self, other: Direction) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Direction {
    type Output = Direction;

    fn bitor(self, rhs: Direction) -> Direction {
        Direction(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    JetStart,
    JetStop,
    JetCabin,
    Explosion,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The whole session. Each collection exclusively owns its entities;
/// removing one from its `Vec` is the only way it is destroyed.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub chickens: Vec<Enemy>,
    pub bosses: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub health: Vec<Health>,
    pub score: u32,
    pub kills: u32,
    pub level: u32,
    pub status: GameStatus,
    pub frame: u64,
    pub sprites: SpriteSheet,
    pub tunables: Tunables,
}
