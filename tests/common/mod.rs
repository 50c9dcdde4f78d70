#![allow(dead_code)]

use chicken_shooter::compute::init_state;
use chicken_shooter::entities::*;
use chicken_shooter::factory;
use chicken_shooter::geometry::Vec2;
use chicken_shooter::platform::Host;
use chicken_shooter::Tunables;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub const PLAYFIELD: (f32, f32) = (784.0, 564.0);

/// Host that remembers every cue and reports whatever direction the test
/// sets.
pub struct RecordingHost {
    pub playfield: (f32, f32),
    pub cues: Vec<SoundCue>,
    pub held: Direction,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            playfield: PLAYFIELD,
            cues: Vec::new(),
            held: Direction::NONE,
        }
    }
}

impl Host for RecordingHost {
    fn playfield_size(&self) -> (f32, f32) {
        self.playfield
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    fn direction_flags(&mut self) -> Direction {
        self.held
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn quiet_tunables() -> Tunables {
    Tunables {
        enemy_fire_chance: 0.0,
        ..Tunables::default()
    }
}

/// Opening state with nothing going on near the player: enemies never
/// fire, one chicken hangs still at the top of the screen and the health
/// pickup sits in the bottom-right corner.
pub fn quiet_state() -> GameState {
    let mut state = init_state(SpriteSheet::standard(), quiet_tunables());
    state.chickens = vec![parked_chicken(&state, Vec2::new(400.0, 20.0))];
    state.health = vec![factory::health(&state.sprites, Vec2::new(700.0, 500.0))];
    state
}

pub fn parked_chicken(state: &GameState, position: Vec2) -> Enemy {
    factory::chicken(&state.sprites, position, Vec2::ZERO)
}

pub fn parked_boss(state: &GameState, position: Vec2) -> Enemy {
    factory::boss(&state.sprites, position, Vec2::ZERO)
}

pub fn player_bullet_at(state: &GameState, position: Vec2) -> Bullet {
    Bullet {
        body: Entity::new(
            state.sprites.player_bullet,
            position,
            Vec2::new(0.0, -state.tunables.player_bullet_speed),
            Vec2::splat(0.1),
        ),
        kind: BulletKind::Player,
    }
}

pub fn hostile_bullet_at(state: &GameState, position: Vec2) -> Bullet {
    Bullet {
        body: Entity::new(
            state.sprites.chicken_bullet,
            position,
            Vec2::new(0.0, state.tunables.hostile_bullet_speed),
            Vec2::splat(0.1),
        ),
        kind: BulletKind::Hostile,
    }
}
