//! Collision and combat resolution
//!
//! Rules run in a fixed order against the state as it was when the phase
//! began. Removals are collected and applied once at the end, so no rule hides
//! an entity from a later one; the only exception is that a projectile spent in
//! rule 1 is no longer available to rule 2.
//!
//! 1. player projectile vs opponents: first hit wins, opponent destroyed, +score.
//!    Every projectile over an opponent scores, even if that opponent was
//!    already hit earlier in the tick; it is still removed once.
//! 2. opponent projectile vs player: first hit costs a life and resets the player
//! 3. player body vs opponent bodies: the player's last step is undone
//! 4. opponents below the field escape and cost a life each

use super::movement::undo_last_move;
use super::state::{MatchEvent, MatchState};
use crate::consts::SCORE_PER_KILL;

/// What the collision phase did (mainly for tests and logging)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// (projectile id, opponent id) pairs
    pub kills: Vec<(u32, u32)>,
    /// Projectile id that hit the player
    pub player_hit: Option<u32>,
    /// Player step reverted due to body contact
    pub blocked: bool,
    /// Opponent ids that escaped
    pub escaped: Vec<u32>,
}

/// Run the collision phase
pub fn resolve(state: &mut MatchState) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut spent = vec![false; state.projectiles.len()];
    let mut removed = vec![false; state.opponents.len()];

    // 1. Player projectiles vs opponents
    for (pi, projectile) in state.projectiles.iter().enumerate() {
        if !projectile.from_player {
            continue;
        }
        let bounds = projectile.bounds();
        let hit = state
            .opponents
            .iter()
            .enumerate()
            .find(|(_, o)| o.bounds().intersects(&bounds));
        if let Some((oi, opponent)) = hit {
            spent[pi] = true;
            removed[oi] = true;
            report.kills.push((projectile.id, opponent.id));
        }
    }
    for &(projectile, id) in &report.kills {
        if let Some(opponent) = state.opponents.iter().find(|o| o.id == id) {
            let pos = opponent.pos;
            state.spawn_effect(pos);
        }
        state.score += SCORE_PER_KILL;
        log::debug!("Opponent {} destroyed by projectile {}", id, projectile);
        state.events.push(MatchEvent::OpponentDestroyed { id, projectile });
    }

    // 2. Opponent projectiles vs player
    let player_bounds = state.player.bounds();
    let hit = state
        .projectiles
        .iter()
        .enumerate()
        .find(|(pi, p)| !p.from_player && !spent[*pi] && p.bounds().intersects(&player_bounds));
    if let Some((pi, projectile)) = hit {
        let id = projectile.id;
        spent[pi] = true;
        report.player_hit = Some(id);
        let pos = state.player.pos;
        state.spawn_effect(pos);
        log::debug!("Player hit by projectile {}", id);
        state.events.push(MatchEvent::PlayerHit { projectile: id });
        state.lose_life();
        state.player.reset_to_spawn();
    }

    // 3. Player body vs opponent bodies
    let player_bounds = state.player.bounds();
    if state
        .opponents
        .iter()
        .any(|o| o.bounds().intersects(&player_bounds))
    {
        undo_last_move(&mut state.player);
        report.blocked = true;
    }

    // 4. Opponents escaping past the bottom edge
    let floor = state.field.height;
    for (oi, opponent) in state.opponents.iter().enumerate() {
        if !removed[oi] && opponent.pos.y > floor {
            removed[oi] = true;
            report.escaped.push(opponent.id);
        }
    }
    for &id in &report.escaped {
        log::debug!("Opponent {} escaped", id);
        state.events.push(MatchEvent::OpponentEscaped { id });
        state.lose_life();
    }

    let mut flags = removed.into_iter();
    state.opponents.retain(|_| !flags.next().unwrap_or(false));
    let mut flags = spent.into_iter();
    state.projectiles.retain(|_| !flags.next().unwrap_or(false));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::direction::Direction;
    use crate::sim::state::{MatchPhase, Projectile};
    use glam::IVec2;

    fn playing() -> MatchState {
        let mut state = MatchState::with_seed(42);
        state.start_match();
        state.events.clear();
        state
    }

    fn shot(state: &mut MatchState, pos: IVec2, from_player: bool) -> u32 {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos,
            direction: Direction::Up,
            from_player,
        });
        id
    }

    #[test]
    fn test_player_projectile_destroys_opponent() {
        let mut state = playing();
        let opponent = state.add_opponent(IVec2::new(100, 100));
        let projectile = shot(&mut state, IVec2::new(110, 110), true);

        let report = resolve(&mut state);
        assert_eq!(report.kills, vec![(projectile, opponent)]);
        assert!(state.opponents.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].pos, IVec2::new(100, 100));
        assert_eq!(state.score, SCORE_PER_KILL);
    }

    #[test]
    fn test_one_opponent_per_projectile() {
        let mut state = playing();
        state.add_opponent(IVec2::new(100, 100));
        state.add_opponent(IVec2::new(105, 105));
        shot(&mut state, IVec2::new(110, 110), true);

        let report = resolve(&mut state);
        assert_eq!(report.kills.len(), 1);
        assert_eq!(state.opponents.len(), 1);
        // First in collection order wins
        assert_eq!(state.opponents[0].pos, IVec2::new(105, 105));
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_two_projectiles_on_one_opponent() {
        let mut state = playing();
        let opponent = state.add_opponent(IVec2::new(100, 100));
        let first = shot(&mut state, IVec2::new(110, 110), true);
        let second = shot(&mut state, IVec2::new(120, 120), true);

        let report = resolve(&mut state);
        assert_eq!(report.kills, vec![(first, opponent), (second, opponent)]);
        assert_eq!(state.score, 2 * SCORE_PER_KILL);
        // Both projectiles are spent, the opponent goes once
        assert!(state.projectiles.is_empty());
        assert!(state.opponents.is_empty());
        assert_eq!(state.effects.len(), 2);
        assert!(state.effects.iter().all(|e| e.pos == IVec2::new(100, 100)));
    }

    #[test]
    fn test_opponent_projectile_hits_player() {
        let mut state = playing();
        state.player.pos = IVec2::new(200, 300);
        let projectile = shot(&mut state, IVec2::new(210, 310), false);

        let report = resolve(&mut state);
        assert_eq!(report.player_hit, Some(projectile));
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.player.pos, IVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(state.effects.len(), 1);
        assert_eq!(state.effects[0].pos, IVec2::new(200, 300));
        assert!(state.projectiles.is_empty());
        assert_eq!(state.phase, MatchPhase::Playing);
    }

    #[test]
    fn test_player_hit_once_per_tick() {
        let mut state = playing();
        state.player.pos = IVec2::new(200, 300);
        shot(&mut state, IVec2::new(210, 310), false);
        shot(&mut state, IVec2::new(215, 315), false);

        resolve(&mut state);
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_own_projectiles_are_harmless() {
        let mut state = playing();
        let opponent_pos = IVec2::new(100, 100);
        state.add_opponent(opponent_pos);
        // Opponent shot over an opponent, player shot over the player
        shot(&mut state, IVec2::new(110, 110), false);
        let own = state.player.pos + IVec2::splat(5);
        shot(&mut state, own, true);

        let report = resolve(&mut state);
        assert!(report.kills.is_empty());
        assert_eq!(report.player_hit, None);
        assert_eq!(state.projectiles.len(), 2);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_third_hit_ends_match() {
        let mut state = playing();
        for hit in 1..=3 {
            let at = state.player.pos + IVec2::splat(10);
            shot(&mut state, at, false);
            resolve(&mut state);
            assert_eq!(state.lives, STARTING_LIVES - hit);
            if hit < 3 {
                assert_eq!(state.phase, MatchPhase::Playing);
            }
        }
        assert_eq!(state.phase, MatchPhase::GameOver);
    }

    #[test]
    fn test_body_contact_reverts_player_step() {
        let mut state = playing();
        state.player.pos = IVec2::new(200, 200);
        state.player.set_heading(Direction::Right);
        crate::sim::movement::advance(&mut state.player, &state.field);
        state.add_opponent(IVec2::new(240, 200));

        let report = resolve(&mut state);
        assert!(report.blocked);
        assert_eq!(state.player.pos, IVec2::new(200, 200));
        assert_eq!(state.opponents.len(), 1);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_escaped_opponent_costs_life() {
        let mut state = playing();
        let id = state.add_opponent(IVec2::new(100, FIELD_HEIGHT + 1));
        state.add_opponent(IVec2::new(200, FIELD_HEIGHT));

        let report = resolve(&mut state);
        assert_eq!(report.escaped, vec![id]);
        assert_eq!(state.opponents.len(), 1);
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(state.events.contains(&MatchEvent::OpponentEscaped { id }));
    }

    #[test]
    fn test_escapes_can_end_match() {
        let mut state = playing();
        state.lives = 2;
        for x in [0, 100, 200] {
            state.add_opponent(IVec2::new(x, FIELD_HEIGHT + 5));
        }
        resolve(&mut state);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert!(state.opponents.is_empty());
    }
}
