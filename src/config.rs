/// Runtime knobs that change the feel of the game but not its rules.
///
/// Velocities are pixels per tick: the simulation takes one fixed step per
/// host frame regardless of wall-clock time.

use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
pub struct Tunables {
    /// Velocity added per tick while a direction is held.
    pub player_accel: f32,
    /// Fraction of the player's velocity kept after each tick.
    pub player_drag: f32,
    /// Speed above which a stopped player counts as moving.
    pub motion_start_speed: f32,
    /// Speed below which a moving player counts as stopped.
    pub motion_stop_speed: f32,
    /// Ticks between repeats of the cabin cue while moving.
    pub cabin_cue_ticks: u32,
    pub chicken_speed: f32,
    pub boss_speed: f32,
    pub player_bullet_speed: f32,
    pub hostile_bullet_speed: f32,
    /// Per-tick probability that a single chicken or boss fires.
    pub enemy_fire_chance: f64,
    /// Ticks between explosion animation frames.
    pub explosion_frame_ticks: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_accel: 2.1,
            player_drag: 0.85,
            motion_start_speed: 3.5,
            motion_stop_speed: 2.5,
            cabin_cue_ticks: 30,
            chicken_speed: 3.0,
            boss_speed: 2.0,
            player_bullet_speed: 10.0,
            hostile_bullet_speed: 5.0,
            enemy_fire_chance: 1.0 / 600.0,
            explosion_frame_ticks: 2,
        }
    }
}

impl Tunables {
    pub fn validate(&self) -> Result<(), GameError> {
        if !(0.0..=1.0).contains(&self.enemy_fire_chance) {
            return Err(GameError::InvalidConfig {
                field: "enemy_fire_chance",
                reason: format!("{} is not a probability", self.enemy_fire_chance),
            });
        }
        if !(0.0..1.0).contains(&self.player_drag) {
            return Err(GameError::InvalidConfig {
                field: "player_drag",
                reason: format!("{} must be in [0, 1)", self.player_drag),
            });
        }
        if self.motion_stop_speed > self.motion_start_speed {
            return Err(GameError::InvalidConfig {
                field: "motion_stop_speed",
                reason: "must not exceed motion_start_speed".to_string(),
            });
        }
        if self.explosion_frame_ticks == 0 {
            return Err(GameError::InvalidConfig {
                field: "explosion_frame_ticks",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.cabin_cue_ticks == 0 {
            return Err(GameError::InvalidConfig {
                field: "cabin_cue_ticks",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
