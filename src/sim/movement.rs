//! Movement and bounds
//!
//! Actors move by their velocity and are clamped to the field; there is no
//! bounce or wrap. Projectiles fly freely and are culled once outside.

use glam::IVec2;

use super::rect::Field;
use super::state::{Actor, MatchState, Projectile};
use crate::consts::PROJECTILE_SPEED;

/// Apply velocity, then clamp each axis so the actor box stays in the field
pub fn advance(actor: &mut Actor, field: &Field) {
    let before = actor.pos;
    actor.pos = field.clamp_pos(actor.pos + actor.vel, actor.size());
    actor.last_step = actor.pos - before;
}

/// Revert the displacement applied by the last `advance`
pub fn undo_last_move(actor: &mut Actor) {
    actor.pos -= actor.last_step;
    actor.last_step = IVec2::ZERO;
}

/// Fly one tick along the projectile's direction
pub fn advance_projectile(projectile: &mut Projectile) {
    projectile.pos += projectile.direction.vector() * PROJECTILE_SPEED;
}

/// Movement phase: every actor, projectile and effect steps once.
///
/// Projectiles that left the field and finished effects are dropped here.
pub fn update(state: &mut MatchState) {
    let field = state.field;

    advance(&mut state.player, &field);
    for opponent in &mut state.opponents {
        advance(opponent, &field);
    }

    for projectile in &mut state.projectiles {
        advance_projectile(projectile);
    }
    state.projectiles.retain(|p| field.contains_point(p.pos));

    for effect in &mut state.effects {
        effect.grow();
    }
    state.effects.retain(|e| !e.is_finished());
}
