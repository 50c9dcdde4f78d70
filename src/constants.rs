//! Fixed rules of the game. Anything a player might want to tune lives in
//! [`crate::config::Tunables`] instead.

use crate::geometry::Vec2;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SPAWN: Vec2 = Vec2::new(100.0, 400.0);
pub const PLAYER_START_LIVES: u32 = 3;
pub const PLAYER_MAX_LIVES: u32 = 3;

/// Heart icons for the lives display.
pub const LIFE_ICON_ORIGIN: Vec2 = Vec2::new(135.0, 135.0);
pub const LIFE_ICON_SCALE: f32 = 0.1;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const PATROL_MIN_X: f32 = 100.0;
pub const PATROL_MAX_X: f32 = 700.0;

pub const CHICKEN_SCALE: f32 = 0.5;
pub const INITIAL_CHICKEN_POSITION: Vec2 = Vec2::new(600.0, 100.0);

pub const WAVE_SIZE: usize = 4;
pub const WAVE_ORIGIN: Vec2 = Vec2::new(100.0, 100.0);
pub const WAVE_SPACING: f32 = 200.0;

pub const BOSS_SPAWN: Vec2 = Vec2::new(0.0, 100.0);
pub const BOSS_LEVEL: u32 = 5;

// ── Scoring ──────────────────────────────────────────────────────────────────

pub const CHICKEN_SCORE: u32 = 100;
pub const BOSS_SCORE: u32 = 500;

/// Kills needed per level once past the first kill.
pub const KILLS_PER_LEVEL: u32 = 4;

// ── Pickups & projectiles ────────────────────────────────────────────────────

pub const INITIAL_HEALTH_POSITION: Vec2 = Vec2::new(300.0, 300.0);
/// Health pickups drop anywhere inside `[0, extent] × [0, extent]`.
pub const HEALTH_SPAWN_EXTENT: f32 = 860.0;

pub const BULLET_SCALE: f32 = 0.1;
