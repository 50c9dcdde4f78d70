use crate::constants::{LIFE_ICON_ORIGIN, LIFE_ICON_SCALE};
use crate::entities::{Entity, GameState};
use crate::explosion::ExplosionState;
use crate::geometry::Vec2;
use crate::platform::Renderer;

/// Issue the draw calls for one frame, back to front: lives, player (or its
/// explosion), bullets, chickens, pickups, boss.
pub fn render(state: &GameState, renderer: &mut impl Renderer) {
    let heart = &state.sprites.heart;
    let icon_scale = Vec2::splat(LIFE_ICON_SCALE);
    for i in 0..state.player.lives {
        let offset = Vec2::new(i as f32 * heart.width * LIFE_ICON_SCALE, 0.0);
        renderer.draw(heart, LIFE_ICON_ORIGIN + offset, icon_scale);
    }

    match state.player.explosion {
        ExplosionState::Normal => draw_entity(renderer, &state.player.body),
        ExplosionState::Exploding { frame } => renderer.draw_frame(
            &state.sprites.explosion,
            frame,
            state.player.blast_origin,
            Vec2::ONE,
        ),
    }

    for bullet in &state.bullets {
        draw_entity(renderer, &bullet.body);
    }
    for chicken in &state.chickens {
        draw_entity(renderer, &chicken.body);
    }
    for pickup in &state.health {
        draw_entity(renderer, &pickup.body);
    }
    for boss in &state.bosses {
        draw_entity(renderer, &boss.body);
    }
}

fn draw_entity(renderer: &mut impl Renderer, body: &Entity) {
    renderer.draw(&body.sprite, body.position, body.scale);
}
