/// Game-logic functions.
///
/// Every public function mutates the `GameState` it is handed in place.
/// Randomness comes in through an injected RNG and every platform effect
/// (window size, sound, input) through a [`Host`], so a seeded RNG plus a
/// recording host reproduce a session exactly.

use rand::Rng;
use tracing::{debug, info};

use crate::collision::{self, BulletOutcome};
use crate::config::Tunables;
use crate::constants::{
    BOSS_SCORE, CHICKEN_SCORE, INITIAL_CHICKEN_POSITION, INITIAL_HEALTH_POSITION, PATROL_MAX_X,
    PATROL_MIN_X, PLAYER_MAX_LIVES, PLAYER_SPAWN,
};
use crate::entities::{
    Direction, EnemyKind, Entity, GameState, GameStatus, MotionState, Player, SoundCue,
    SpriteSheet,
};
use crate::error::GameError;
use crate::factory;
use crate::geometry::Vec2;
use crate::platform::{self, Host, SpriteLoader};
use crate::spawn;

/// Score awarded per enemy destroyed.
pub fn score_for(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Chicken => CHICKEN_SCORE,
        EnemyKind::Boss => BOSS_SCORE,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Opening position: the player at the spawn point, one chicken on patrol
/// and a health pickup waiting.
pub fn init_state(sprites: SpriteSheet, tunables: Tunables) -> GameState {
    let chicken = factory::chicken(
        &sprites,
        INITIAL_CHICKEN_POSITION,
        Vec2::new(tunables.chicken_speed, 0.0),
    );
    let health = factory::health(&sprites, INITIAL_HEALTH_POSITION);
    GameState {
        player: factory::player(&sprites),
        chickens: vec![chicken],
        bosses: Vec::new(),
        bullets: Vec::new(),
        health: vec![health],
        score: 0,
        kills: 0,
        level: 0,
        status: GameStatus::Playing,
        frame: 0,
        sprites,
        tunables,
    }
}

/// Validate settings, load art and check the window before building the
/// opening state. Any failure here means the game cannot start.
pub fn new_game(
    loader: &mut impl SpriteLoader,
    host: &impl Host,
    tunables: Tunables,
) -> Result<GameState, GameError> {
    tunables.validate()?;
    let (width, height) = platform::checked_playfield(host)?;
    let sprites = SpriteSheet::load(loader)?;
    info!(width, height, "new game");
    Ok(init_state(sprites, tunables))
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Accelerate along every held direction. Ignored mid-explosion.
pub fn move_player(player: &mut Player, directions: Direction, tunables: &Tunables) {
    if player.is_exploding() {
        return;
    }
    let accel = tunables.player_accel;
    let velocity = &mut player.body.velocity;
    if directions.contains(Direction::LEFT) {
        velocity.x -= accel;
    }
    if directions.contains(Direction::RIGHT) {
        velocity.x += accel;
    }
    if directions.contains(Direction::FORWARD) {
        velocity.y -= accel;
    }
    if directions.contains(Direction::BACKWARD) {
        velocity.y += accel;
    }
}

/// Keep the player's box inside the playfield.
pub fn clamp_to_playfield(body: &mut Entity, width: f32, height: f32) {
    let extent = body.extent();
    body.position.x = body.position.x.min(width - extent.x).max(0.0);
    body.position.y = body.position.y.min(height - extent.y).max(0.0);
}

/// Integrate the player one tick and drive the engine-sound state machine.
pub fn update_player(
    player: &mut Player,
    tunables: &Tunables,
    playfield: (f32, f32),
    host: &mut impl Host,
) {
    player.body.position += player.body.velocity;
    let speed = player.body.velocity.magnitude();
    player.body.velocity = player.body.velocity * tunables.player_drag;
    clamp_to_playfield(&mut player.body, playfield.0, playfield.1);

    player.cue_timer = player.cue_timer.saturating_add(1);
    match player.motion {
        MotionState::Stopped => {
            if speed > tunables.motion_start_speed {
                player.motion = MotionState::Moving;
                player.cue_timer = 0;
                host.play_sound(SoundCue::JetStart);
            }
        }
        MotionState::Moving => {
            if speed < tunables.motion_stop_speed {
                player.motion = MotionState::Stopped;
                player.cue_timer = 0;
                host.play_sound(SoundCue::JetStop);
            } else if player.cue_timer >= tunables.cabin_cue_ticks {
                player.cue_timer = 0;
                host.play_sound(SoundCue::JetCabin);
            }
        }
    }
}

/// Fire a bullet from the player. Returns `false` if the player cannot
/// shoot right now.
pub fn player_shoot(state: &mut GameState) -> bool {
    if state.status != GameStatus::Playing || state.player.is_exploding() {
        return false;
    }
    let bullet = factory::player_bullet(&state.player, &state.sprites, &state.tunables);
    debug!(x = bullet.body.position.x, y = bullet.body.position.y, "player fired");
    state.bullets.push(bullet);
    true
}

/// Blow the player up: one life lost, back to the spawn point, standing
/// still. Does nothing if an explosion is already running.
pub fn explode_player(player: &mut Player, host: &mut impl Host) -> bool {
    if !player.explosion.trigger() {
        return false;
    }
    player.lives = player.lives.saturating_sub(1);
    player.blast_origin = player.body.position;
    player.body.position = PLAYER_SPAWN;
    player.body.velocity = Vec2::ZERO;
    host.play_sound(SoundCue::Explosion);
    info!(lives = player.lives, "player destroyed");
    true
}

/// Step the explosion animation. Returns `true` when it has just finished
/// and the player is back in control.
pub fn advance_explosion(player: &mut Player, frame_count: u32) -> bool {
    if !player.explosion.advance(frame_count) {
        return false;
    }
    player.body.velocity = Vec2::ZERO;
    player.motion = MotionState::Stopped;
    player.cue_timer = 0;
    debug!("player respawned");
    true
}

/// One extra life, never above the cap.
pub fn add_life(player: &mut Player) {
    if player.lives < PLAYER_MAX_LIVES {
        player.lives += 1;
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Patrol step shared by chickens and the boss: turn around past the
/// horizontal bounds, then move.
pub fn patrol(body: &mut Entity) {
    if body.position.x > PATROL_MAX_X && body.velocity.x > 0.0 {
        body.velocity.x = -body.velocity.x;
    } else if body.position.x < PATROL_MIN_X && body.velocity.x < 0.0 {
        body.velocity.x = -body.velocity.x;
    }
    body.position += body.velocity;
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// Order matters and is fixed: spawns, bullets (movement, hits, removal),
/// enemy patrol and fire, pickups, boss contact, game-over check, level,
/// boss arrival, then the player.
pub fn tick(state: &mut GameState, host: &mut impl Host, rng: &mut impl Rng) {
    if state.status == GameStatus::GameOver {
        return;
    }
    state.frame += 1;
    let playfield = host.playfield_size();

    // ── 1. Spawns ────────────────────────────────────────────────────────────
    spawn::spawn_wave(state);
    spawn::spawn_health(state, rng);

    // ── 2. Bullets ───────────────────────────────────────────────────────────
    resolve_bullets(state, host, playfield);

    // ── 3. Enemies patrol and maybe shoot ────────────────────────────────────
    advance_enemies(state, rng);

    // ── 4. Pickups ───────────────────────────────────────────────────────────
    collect_pickups(state);

    // ── 5. Ramming the boss ──────────────────────────────────────────────────
    if collision::boss_contact(&state.player, &state.bosses).is_some() {
        explode_player(&mut state.player, host);
    }

    // ── 6. Out of lives ──────────────────────────────────────────────────────
    if !state.player.is_exploding() && state.player.lives < 1 {
        state.status = GameStatus::GameOver;
        info!(score = state.score, kills = state.kills, "game over");
        return;
    }

    // ── 7. Level & boss ──────────────────────────────────────────────────────
    let level = spawn::level_for(state.kills);
    if level != state.level {
        info!(level, kills = state.kills, "level up");
        state.level = level;
    }
    spawn::spawn_boss(state);

    // ── 8. Player ────────────────────────────────────────────────────────────
    let directions = host.direction_flags();
    move_player(&mut state.player, directions, &state.tunables);
    update_player(&mut state.player, &state.tunables, playfield, host);
    let pace = u64::from(state.tunables.explosion_frame_ticks);
    if state.player.is_exploding() && state.frame % pace == 0 {
        advance_explosion(&mut state.player, state.sprites.explosion.frame_count);
    }
}

/// Move every bullet, apply its first hit, and drop it if it hit something
/// or left the playfield. Each bullet is visited exactly once.
fn resolve_bullets(state: &mut GameState, host: &mut impl Host, playfield: (f32, f32)) {
    let GameState {
        player,
        chickens,
        bosses,
        bullets,
        score,
        kills,
        ..
    } = state;

    bullets.retain_mut(|bullet| {
        bullet.body.position += bullet.body.velocity;
        let hit = match collision::bullet_outcome(bullet, chickens, bosses, player) {
            BulletOutcome::Miss => false,
            BulletOutcome::Chicken(i) => {
                let chicken = chickens.remove(i);
                *score += score_for(chicken.kind);
                *kills += 1;
                debug!(score = *score, kills = *kills, "chicken down");
                true
            }
            BulletOutcome::Boss(i) => {
                let boss = bosses.remove(i);
                *score += score_for(boss.kind);
                *kills += 1;
                info!(score = *score, kills = *kills, "boss defeated");
                true
            }
            BulletOutcome::Player => {
                explode_player(player, host);
                true
            }
        };
        !hit && !collision::is_outside(bullet, playfield.0, playfield.1)
    });
}

fn advance_enemies(state: &mut GameState, rng: &mut impl Rng) {
    let GameState {
        chickens,
        bosses,
        bullets,
        sprites,
        tunables,
        ..
    } = state;

    for enemy in chickens.iter_mut().chain(bosses.iter_mut()) {
        patrol(&mut enemy.body);
        if spawn::enemy_fires(tunables.enemy_fire_chance, rng) {
            bullets.push(factory::enemy_bullet(enemy, sprites, tunables));
            debug!(kind = ?enemy.kind, "enemy fired");
        }
    }
}

fn collect_pickups(state: &mut GameState) {
    let GameState { player, health, .. } = state;

    health.retain_mut(|pickup| {
        pickup.body.position += pickup.body.velocity;
        if collision::player_collects(player, &pickup.body) {
            add_life(player);
            debug!(lives = player.lives, "health collected");
            false
        } else {
            true
        }
    });
}
