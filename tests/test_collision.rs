mod common;

use chicken_shooter::collision::*;
use chicken_shooter::geometry::Vec2;

use common::*;

#[test]
fn player_hit_zone_is_upper_half() {
    let s = quiet_state();
    let high = hostile_bullet_at(&s, Vec2::new(120.0, 410.0));
    let low = hostile_bullet_at(&s, Vec2::new(120.0, 440.0));
    assert!(player_touches(&s.player.body, &high.body));
    // Boxes overlap, but too far below the player's top edge
    assert!(overlaps(&s.player.body, &low.body));
    assert!(!player_touches(&s.player.body, &low.body));
}

#[test]
fn player_bullet_prefers_chickens_over_boss() {
    let mut s = quiet_state();
    s.chickens = vec![
        parked_chicken(&s, Vec2::new(500.0, 20.0)),
        parked_chicken(&s, Vec2::new(300.0, 20.0)),
    ];
    s.bosses = vec![parked_boss(&s, Vec2::new(280.0, 0.0))];
    let bullet = player_bullet_at(&s, Vec2::new(320.0, 50.0));
    assert_eq!(
        bullet_outcome(&bullet, &s.chickens, &s.bosses, &s.player),
        BulletOutcome::Chicken(1)
    );

    s.chickens.remove(1);
    assert_eq!(
        bullet_outcome(&bullet, &s.chickens, &s.bosses, &s.player),
        BulletOutcome::Boss(0)
    );
}

#[test]
fn first_hit_is_in_collection_order() {
    let s = quiet_state();
    let enemies = vec![
        parked_chicken(&s, Vec2::new(0.0, 0.0)),
        parked_chicken(&s, Vec2::new(10.0, 10.0)),
    ];
    let bullet = player_bullet_at(&s, Vec2::new(20.0, 20.0));
    assert_eq!(first_hit(&bullet.body, &enemies), Some(0));
    assert_eq!(first_hit(&bullet.body, &enemies[1..]), Some(0));
    assert_eq!(first_hit(&bullet.body, &[]), None);
}

#[test]
fn hostile_bullet_ignores_enemies() {
    let s = quiet_state();
    let bullet = hostile_bullet_at(&s, Vec2::new(420.0, 40.0));
    assert_eq!(
        bullet_outcome(&bullet, &s.chickens, &s.bosses, &s.player),
        BulletOutcome::Miss
    );
}

#[test]
fn hostile_bullet_misses_exploding_player() {
    let mut s = quiet_state();
    let bullet = hostile_bullet_at(&s, Vec2::new(120.0, 410.0));
    assert_eq!(
        bullet_outcome(&bullet, &s.chickens, &s.bosses, &s.player),
        BulletOutcome::Player
    );
    s.player.explosion.trigger();
    assert_eq!(
        bullet_outcome(&bullet, &s.chickens, &s.bosses, &s.player),
        BulletOutcome::Miss
    );
}

#[test]
fn pickups_use_narrowed_test() {
    let s = quiet_state();
    let near = chicken_shooter::factory::health(&s.sprites, Vec2::new(110.0, 405.0));
    let low = chicken_shooter::factory::health(&s.sprites, Vec2::new(110.0, 440.0));
    assert!(player_collects(&s.player, &near.body));
    assert!(!player_collects(&s.player, &low.body));
}

#[test]
fn boss_contact_needs_vulnerable_player() {
    let mut s = quiet_state();
    s.bosses = vec![parked_boss(&s, Vec2::new(80.0, 390.0))];
    assert_eq!(boss_contact(&s.player, &s.bosses), Some(0));
    s.player.explosion.trigger();
    assert_eq!(boss_contact(&s.player, &s.bosses), None);
}

#[test]
fn bullet_outside_playfield() {
    let s = quiet_state();
    let (w, h) = PLAYFIELD;
    assert!(!is_outside(&player_bullet_at(&s, Vec2::new(200.0, 200.0)), w, h));
    assert!(is_outside(&player_bullet_at(&s, Vec2::new(200.0, -1.0)), w, h));
    assert!(is_outside(&player_bullet_at(&s, Vec2::new(780.0, 200.0)), w, h));
    assert!(is_outside(&hostile_bullet_at(&s, Vec2::new(200.0, 560.0)), w, h));
}
