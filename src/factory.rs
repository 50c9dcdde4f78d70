/// Entity constructors.
///
/// Bullets take their spawn point from the entity that fires them: the
/// player shoots from its nose, enemies drop bullets from their belly.

use crate::config::Tunables;
use crate::constants::{BULLET_SCALE, CHICKEN_SCALE, PLAYER_SPAWN, PLAYER_START_LIVES};
use crate::entities::{
    Bullet, BulletKind, Enemy, EnemyKind, Entity, Health, MotionState, Player, SpriteSheet,
};
use crate::explosion::ExplosionState;
use crate::geometry::Vec2;

pub fn player(sprites: &SpriteSheet) -> Player {
    Player {
        body: Entity::new(sprites.player, PLAYER_SPAWN, Vec2::ZERO, Vec2::ONE),
        lives: PLAYER_START_LIVES,
        explosion: ExplosionState::Normal,
        blast_origin: PLAYER_SPAWN,
        motion: MotionState::Stopped,
        cue_timer: 0,
    }
}

pub fn chicken(sprites: &SpriteSheet, position: Vec2, velocity: Vec2) -> Enemy {
    Enemy {
        body: Entity::new(
            sprites.chicken,
            position,
            velocity,
            Vec2::splat(CHICKEN_SCALE),
        ),
        kind: EnemyKind::Chicken,
    }
}

pub fn boss(sprites: &SpriteSheet, position: Vec2, velocity: Vec2) -> Enemy {
    Enemy {
        body: Entity::new(sprites.boss, position, velocity, Vec2::ONE),
        kind: EnemyKind::Boss,
    }
}

pub fn health(sprites: &SpriteSheet, position: Vec2) -> Health {
    Health {
        body: Entity::new(sprites.health, position, Vec2::ZERO, Vec2::ONE),
    }
}

/// Player bullet, centred on the player and travelling straight up.
pub fn player_bullet(player: &Player, sprites: &SpriteSheet, tunables: &Tunables) -> Bullet {
    let sprite = sprites.player_bullet;
    let scale = Vec2::splat(BULLET_SCALE);
    let size = sprite.size().scaled_by(scale);
    let shooter = player.body.extent();
    let position = Vec2::new(
        player.body.position.x + (shooter.x - size.x) * 0.5,
        player.body.position.y - size.y,
    );
    Bullet {
        body: Entity::new(
            sprite,
            position,
            Vec2::new(0.0, -tunables.player_bullet_speed),
            scale,
        ),
        kind: BulletKind::Player,
    }
}

/// Hostile bullet dropped from beneath a chicken or the boss.
pub fn enemy_bullet(enemy: &Enemy, sprites: &SpriteSheet, tunables: &Tunables) -> Bullet {
    let sprite = match enemy.kind {
        EnemyKind::Chicken => sprites.chicken_bullet,
        EnemyKind::Boss => sprites.boss_bullet,
    };
    let scale = Vec2::splat(BULLET_SCALE);
    let size = sprite.size().scaled_by(scale);
    let shooter = enemy.body.extent();
    let position = Vec2::new(
        enemy.body.position.x + (shooter.x - size.x) * 0.5,
        enemy.body.position.y + shooter.y,
    );
    Bullet {
        body: Entity::new(
            sprite,
            position,
            Vec2::new(0.0, tunables.hostile_bullet_speed),
            scale,
        ),
        kind: BulletKind::Hostile,
    }
}
