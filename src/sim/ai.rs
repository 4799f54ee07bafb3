//! Opponent AI
//!
//! Two independent periodic timers per opponent:
//! - wander: every `WANDER_INTERVAL_TICKS`, with `WANDER_CHANCE_PERCENT` odds,
//!   pick a uniformly random heading
//! - seek: every `SEEK_INTERVAL_TICKS`, head toward the player's center

use glam::IVec2;
use rand::Rng;

use super::direction::Direction;
use super::state::{Actor, ActorKind, MatchState};
use crate::consts::*;
use crate::screen_angle_to_bearing;

/// Heading from `from` toward `to` (both screen-space points), quantized to 8 ways
pub fn heading_toward(from: IVec2, to: IVec2) -> Direction {
    let delta = to - from;
    let screen_angle = (delta.y as f64).atan2(delta.x as f64).to_degrees();
    Direction::from_angle(screen_angle_to_bearing(screen_angle))
}

/// Advance one opponent's timers and apply any heading change.
///
/// `target` is the player's current center. Players are ignored.
pub fn think(opponent: &mut Actor, target: IVec2, rng: &mut impl Rng) {
    let ActorKind::Opponent(mut ai) = opponent.kind else {
        return;
    };

    ai.wander_ticks += 1;
    ai.seek_ticks += 1;

    if ai.seek_ticks >= SEEK_INTERVAL_TICKS {
        let heading = heading_toward(opponent.center(), target);
        log::trace!("Opponent {} seeks {:?}", opponent.id, heading);
        opponent.set_heading(heading);
        ai.seek_ticks = 0;
    }

    if ai.wander_ticks >= WANDER_INTERVAL_TICKS {
        if rng.random_range(0..100) < WANDER_CHANCE_PERCENT {
            let heading = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            log::trace!("Opponent {} wanders {:?}", opponent.id, heading);
            opponent.set_heading(heading);
        }
        ai.wander_ticks = 0;
    }

    opponent.kind = ActorKind::Opponent(ai);
}

/// AI phase: every opponent thinks once, in collection order
pub fn update(state: &mut MatchState) {
    let target = state.player.center();
    for opponent in &mut state.opponents {
        think(opponent, target, &mut state.rng);
    }
}
