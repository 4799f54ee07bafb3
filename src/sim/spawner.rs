//! Opponent spawning and opponent fire pacing
//!
//! Both are driven by the active difficulty profile. Hitting a cap is policy,
//! not an error: the attempt is skipped.

use glam::IVec2;
use rand::Rng;

use super::state::{MatchEvent, MatchState};
use crate::consts::ACTOR_SIZE;

/// Milliseconds of play since the last spawn
pub fn ms_since_last_spawn(state: &MatchState) -> u64 {
    state.time_ticks.saturating_sub(state.last_spawn_tick) * state.tick_ms as u64
}

/// Spawn one opponent if below the cap and the spawn interval has elapsed.
///
/// Returns the new opponent's id.
pub fn try_spawn_opponent(state: &mut MatchState) -> Option<u32> {
    if state.opponents.len() >= state.max_opponents {
        return None;
    }
    let interval = state.difficulty.profile().spawn_interval_ms as u64;
    if ms_since_last_spawn(state) <= interval {
        return None;
    }

    // Anywhere horizontally that fits, within the top third
    let x = state.rng.random_range(0..state.field.width - ACTOR_SIZE);
    let y = state.rng.random_range(0..(state.field.height / 3).max(1));
    let pos = IVec2::new(x, y);

    let id = state.add_opponent(pos);
    state.last_spawn_tick = state.time_ticks;
    log::debug!("Opponent {} spawned at ({}, {})", id, x, y);
    state.events.push(MatchEvent::OpponentSpawned { id, pos });
    Some(id)
}

/// Give every opponent one chance to fire, capped by the live opponent-projectile count.
///
/// Each opponent rolls `0..100` against the profile's stepped fire chance; the
/// roll only happens while below the cap.
pub fn opponents_fire(state: &mut MatchState) {
    let profile = state.difficulty.profile();
    let chance = profile.fire_chance_percent();
    let mut live = state.opponent_projectile_count();

    for i in 0..state.opponents.len() {
        if live >= profile.max_projectiles {
            break;
        }
        if state.rng.random_range(0..100) < chance {
            let id = state.next_entity_id();
            let projectile = state.opponents[i].fire(id);
            log::trace!("Opponent {} fires {:?}", state.opponents[i].id, projectile.direction);
            state.projectiles.push(projectile);
            live += 1;
        }
    }
}

/// Spawner phase
pub fn update(state: &mut MatchState) {
    try_spawn_opponent(state);
    opponents_fire(state);
}
