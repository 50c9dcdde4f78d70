/// Collision predicates and per-bullet hit detection.
///
/// Nothing here mutates the world; [`crate::compute::tick`] applies the
/// outcomes.

use crate::entities::{Bullet, BulletKind, Enemy, Entity, Player};

/// Plain bounding-box overlap.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    a.bounds().intersects(&b.bounds())
}

/// Player hit test. On top of the box overlap, the other entity's top edge
/// must sit within half a player-height of the player's top edge, which
/// trims the hit region to the upper part of the player's box.
pub fn player_touches(player: &Entity, other: &Entity) -> bool {
    let vertical = (player.position.y - other.position.y).abs();
    overlaps(player, other) && vertical < player.extent().y / 2.0
}

/// Index of the first enemy `bullet` overlaps, in collection order.
pub fn first_hit(bullet: &Entity, enemies: &[Enemy]) -> Option<usize> {
    enemies.iter().position(|e| overlaps(bullet, &e.body))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOutcome {
    Miss,
    Chicken(usize),
    Boss(usize),
    Player,
}

/// What `bullet` hits this tick. A player bullet checks chickens before the
/// boss and stops at the first hit; a hostile bullet only ever tests the
/// player, and not while the player is exploding.
pub fn bullet_outcome(
    bullet: &Bullet,
    chickens: &[Enemy],
    bosses: &[Enemy],
    player: &Player,
) -> BulletOutcome {
    match bullet.kind {
        BulletKind::Player => {
            if let Some(i) = first_hit(&bullet.body, chickens) {
                BulletOutcome::Chicken(i)
            } else if let Some(i) = first_hit(&bullet.body, bosses) {
                BulletOutcome::Boss(i)
            } else {
                BulletOutcome::Miss
            }
        }
        BulletKind::Hostile => {
            if !player.is_exploding() && player_touches(&player.body, &bullet.body) {
                BulletOutcome::Player
            } else {
                BulletOutcome::Miss
            }
        }
    }
}

/// First boss whose body is touching a vulnerable player.
pub fn boss_contact(player: &Player, bosses: &[Enemy]) -> Option<usize> {
    if player.is_exploding() {
        return None;
    }
    bosses
        .iter()
        .position(|b| player_touches(&player.body, &b.body))
}

/// Pickup collision. Uses the narrowed player test, like every other
/// player-versus-sprite check.
pub fn player_collects(player: &Player, pickup: &Entity) -> bool {
    !player.is_exploding() && player_touches(&player.body, pickup)
}

/// True once any edge of the bullet's box leaves the playfield.
pub fn is_outside(bullet: &Bullet, width: f32, height: f32) -> bool {
    !bullet.body.bounds().is_within(width, height)
}
