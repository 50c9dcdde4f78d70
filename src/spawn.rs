/// Spawning and level policy.

use rand::Rng;
use tracing::{debug, info};

use crate::constants::{
    BOSS_LEVEL, BOSS_SPAWN, HEALTH_SPAWN_EXTENT, KILLS_PER_LEVEL, WAVE_ORIGIN, WAVE_SIZE,
    WAVE_SPACING,
};
use crate::entities::GameState;
use crate::factory;
use crate::geometry::Vec2;

/// Level reached after `kills` kills: 0 before the first kill, 1 on it, then
/// one more level every [`KILLS_PER_LEVEL`] kills.
pub fn level_for(kills: u32) -> u32 {
    match kills {
        0 => 0,
        1 => 1,
        k => 1 + k / KILLS_PER_LEVEL,
    }
}

/// Refill an empty sky with a fresh row of chickens, except on the boss
/// level. Returns how many were spawned.
pub fn spawn_wave(state: &mut GameState) -> usize {
    if !state.chickens.is_empty() || state.level == BOSS_LEVEL {
        return 0;
    }
    let velocity = Vec2::new(state.tunables.chicken_speed, 0.0);
    for i in 0..WAVE_SIZE {
        let position = WAVE_ORIGIN + Vec2::new(i as f32 * WAVE_SPACING, 0.0);
        state
            .chickens
            .push(factory::chicken(&state.sprites, position, velocity));
    }
    debug!(level = state.level, "spawned chicken wave");
    WAVE_SIZE
}

/// Drop a health pickup somewhere random on even levels when none is out.
pub fn spawn_health(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if state.level % 2 != 0 || !state.health.is_empty() {
        return false;
    }
    let position = Vec2::new(
        rng.gen_range(0.0..=HEALTH_SPAWN_EXTENT),
        rng.gen_range(0.0..=HEALTH_SPAWN_EXTENT),
    );
    state.health.push(factory::health(&state.sprites, position));
    debug!(x = position.x, y = position.y, "spawned health pickup");
    true
}

/// Bring in the boss on the boss level if it is not already out.
pub fn spawn_boss(state: &mut GameState) -> bool {
    if state.level != BOSS_LEVEL || !state.bosses.is_empty() {
        return false;
    }
    let velocity = Vec2::new(state.tunables.boss_speed, 0.0);
    state
        .bosses
        .push(factory::boss(&state.sprites, BOSS_SPAWN, velocity));
    info!(level = state.level, "boss has arrived");
    true
}

/// Independent per-enemy, per-tick firing roll.
pub fn enemy_fires(chance: f64, rng: &mut impl Rng) -> bool {
    chance > 0.0 && rng.gen_bool(chance)
}
