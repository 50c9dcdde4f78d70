mod common;

use chicken_shooter::entities::{Sprite, SpriteKind};
use chicken_shooter::geometry::Vec2;
use chicken_shooter::platform::Renderer;
use chicken_shooter::render::render;

use common::*;

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<(SpriteKind, u32, Vec2)>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, sprite: &Sprite, position: Vec2, _scale: Vec2) {
        self.calls.push((sprite.kind, 0, position));
    }

    fn draw_frame(&mut self, sprite: &Sprite, frame: u32, position: Vec2, _scale: Vec2) {
        self.calls.push((sprite.kind, frame, position));
    }
}

fn kinds(r: &RecordingRenderer) -> Vec<SpriteKind> {
    r.calls.iter().map(|(k, _, _)| *k).collect()
}

#[test]
fn render_draws_lives_then_world() {
    let mut s = quiet_state();
    s.bullets.push(player_bullet_at(&s, Vec2::new(200.0, 200.0)));
    let mut r = RecordingRenderer::default();
    render(&s, &mut r);

    assert_eq!(
        kinds(&r),
        vec![
            SpriteKind::Heart,
            SpriteKind::Heart,
            SpriteKind::Heart,
            SpriteKind::Player,
            SpriteKind::PlayerBullet,
            SpriteKind::Chicken,
            SpriteKind::Health,
        ]
    );
    assert_eq!(r.calls[0].2, Vec2::new(135.0, 135.0));
    assert!(r.calls[1].2.x > r.calls[0].2.x);
}

#[test]
fn render_one_heart_per_life() {
    let mut s = quiet_state();
    s.player.lives = 1;
    let mut r = RecordingRenderer::default();
    render(&s, &mut r);
    let hearts = kinds(&r)
        .into_iter()
        .filter(|k| *k == SpriteKind::Heart)
        .count();
    assert_eq!(hearts, 1);
}

#[test]
fn render_explosion_at_blast_origin() {
    let mut s = quiet_state();
    s.player.blast_origin = Vec2::new(300.0, 350.0);
    s.player.explosion.trigger();
    s.player.explosion.advance(16);
    let mut r = RecordingRenderer::default();
    render(&s, &mut r);

    assert!(!kinds(&r).contains(&SpriteKind::Player));
    let blast = r
        .calls
        .iter()
        .find(|(k, _, _)| *k == SpriteKind::Explosion)
        .unwrap();
    assert_eq!(blast.1, 1);
    assert_eq!(blast.2, Vec2::new(300.0, 350.0));
}

#[test]
fn render_draws_boss_last() {
    let mut s = quiet_state();
    s.bosses.push(parked_boss(&s, Vec2::new(0.0, 100.0)));
    let mut r = RecordingRenderer::default();
    render(&s, &mut r);
    assert_eq!(kinds(&r).last(), Some(&SpriteKind::Boss));
}
