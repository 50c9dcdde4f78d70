use chicken_shooter::entities::*;
use chicken_shooter::factory;
use chicken_shooter::geometry::Vec2;
use chicken_shooter::platform::StaticSprites;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq, so equality comparisons must work
    assert_eq!(EnemyKind::Chicken, EnemyKind::Chicken);
    assert_ne!(EnemyKind::Chicken, EnemyKind::Boss);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(BulletKind::Player, BulletKind::Player);
    assert_ne!(BulletKind::Player, BulletKind::Hostile);

    // Clone must produce an equal value
    let kind = EnemyKind::Boss;
    assert_eq!(kind.clone(), EnemyKind::Boss);
}

#[test]
fn game_state_clone_is_independent() {
    let sheet = SpriteSheet::standard();
    let original = chicken_shooter::compute::init_state(sheet, Default::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.position.x = 99.0;
    cloned.score = 999;
    cloned
        .chickens
        .push(factory::chicken(&cloned.sprites, Vec2::ZERO, Vec2::ZERO));

    assert_eq!(original.player.body.position.x, 100.0);
    assert_eq!(original.score, 0);
    assert_eq!(original.chickens.len(), 1);
}

#[test]
fn direction_flags_combine() {
    let d = Direction::LEFT | Direction::FORWARD;
    assert!(d.contains(Direction::LEFT));
    assert!(d.contains(Direction::FORWARD));
    assert!(!d.contains(Direction::RIGHT));
    assert_eq!(d.bits(), 5);
    assert!(Direction::NONE.is_empty());
    assert_eq!(Direction::from_bits_truncate(0xFF).bits(), 0x0F);
}

#[test]
fn standard_sprite_sizes() {
    let explosion = SpriteKind::Explosion.standard();
    assert_eq!(explosion.frame_count, 16);
    assert_eq!(explosion.size(), Vec2::new(128.0, 128.0));
    assert_eq!(SpriteKind::Player.standard().size(), Vec2::new(64.0, 64.0));
    assert!(SpriteKind::ALL
        .iter()
        .all(|k| k.standard().kind == *k && k.standard().frame_count >= 1));
}

#[test]
fn static_loader_yields_standard_sheet() {
    let sheet = SpriteSheet::load(&mut StaticSprites).unwrap();
    assert_eq!(sheet, SpriteSheet::standard());
}

#[test]
fn entity_bounds_follow_scale() {
    let sheet = SpriteSheet::standard();
    let chicken = factory::chicken(&sheet, Vec2::new(100.0, 100.0), Vec2::ZERO);
    let bounds = chicken.body.bounds();
    assert_eq!(bounds.min, Vec2::new(100.0, 100.0));
    assert_eq!(bounds.max, Vec2::new(180.0, 170.0));
}

#[test]
fn enemy_bullet_drops_from_belly() {
    let sheet = SpriteSheet::standard();
    let tunables = Default::default();
    let boss = factory::boss(&sheet, Vec2::new(0.0, 100.0), Vec2::ZERO);
    let bullet = factory::enemy_bullet(&boss, &sheet, &tunables);
    assert_eq!(bullet.kind, BulletKind::Hostile);
    assert_eq!(bullet.body.sprite.kind, SpriteKind::BossBullet);
    // 240×180 boss, 12×12 bullet
    assert_eq!(bullet.body.position, Vec2::new(114.0, 280.0));
    assert!(bullet.body.velocity.y > 0.0);
}
