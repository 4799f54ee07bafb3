//! Read-only post-tick view for renderers and HUDs
//!
//! A snapshot is an owned copy: capture it after [`tick()`](super::tick()) returns
//! and hand it to the presentation side by value.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::{Actor, MatchEvent, MatchPhase, MatchState, Projectile};
use crate::consts::{ACTOR_SIZE, PROJECTILE_SIZE};
use crate::difficulty::Difficulty;

/// Pose of a tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorPose {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub facing: Direction,
}

impl From<&Actor> for ActorPose {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id,
            x: actor.pos.x,
            y: actor.pos.y,
            size: ACTOR_SIZE,
            facing: actor.facing,
        }
    }
}

/// Pose of a projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectilePose {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub direction: Direction,
    pub from_player: bool,
}

impl From<&Projectile> for ProjectilePose {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id,
            x: p.pos.x,
            y: p.pos.y,
            size: PROJECTILE_SIZE,
            direction: p.direction,
            from_player: p.from_player,
        }
    }
}

/// An explosion marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectPose {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub field_width: i32,
    pub field_height: i32,
    pub phase: MatchPhase,
    pub difficulty: Difficulty,
    pub difficulty_name: String,
    pub score: u32,
    pub lives: u32,
    pub player: ActorPose,
    pub opponents: Vec<ActorPose>,
    pub projectiles: Vec<ProjectilePose>,
    pub effects: Vec<EffectPose>,
    /// Events from the tick this snapshot follows
    pub events: Vec<MatchEvent>,
    pub quit_requested: bool,
}

impl Snapshot {
    /// Copy the current state
    pub fn capture(state: &MatchState) -> Self {
        Self {
            tick: state.time_ticks,
            field_width: state.field.width,
            field_height: state.field.height,
            phase: state.phase,
            difficulty: state.difficulty,
            difficulty_name: state.difficulty.as_str().to_string(),
            score: state.score,
            lives: state.lives,
            player: ActorPose::from(&state.player),
            opponents: state.opponents.iter().map(ActorPose::from).collect(),
            projectiles: state.projectiles.iter().map(ProjectilePose::from).collect(),
            effects: state
                .effects
                .iter()
                .map(|e| EffectPose {
                    x: e.pos.x,
                    y: e.pos.y,
                    radius: e.radius,
                })
                .collect(),
            events: state.events.clone(),
            quit_requested: state.quit_requested,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};
    use glam::IVec2;

    #[test]
    fn test_capture_menu() {
        let state = MatchState::with_seed(1);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.phase, MatchPhase::Menu);
        assert_eq!(snap.field_width, 800);
        assert_eq!(snap.field_height, 600);
        assert_eq!(snap.difficulty_name, "MEDIUM");
        assert_eq!(snap.lives, 3);
        assert!(snap.opponents.is_empty());
    }

    #[test]
    fn test_capture_entities() {
        let mut state = MatchState::with_seed(1);
        state.start_match();
        state.add_opponent(IVec2::new(10, 20));
        state.player_fire();
        state.spawn_effect(IVec2::new(5, 5));

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.player.x, 375);
        assert_eq!(snap.player.y, 500);
        assert_eq!(snap.player.facing, Direction::Up);
        assert_eq!(snap.opponents.len(), 1);
        assert_eq!(snap.opponents[0].facing, Direction::Down);
        assert_eq!(snap.projectiles.len(), 1);
        assert!(snap.projectiles[0].from_player);
        assert_eq!(snap.effects, vec![EffectPose { x: 5, y: 5, radius: 5 }]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = MatchState::with_seed(1);
        state.start_match();
        let snap = Snapshot::capture(&state);
        tick(&mut state, &TickInput::default());
        assert_eq!(snap.tick, 0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut state = MatchState::with_seed(1);
        state.start_match();
        state.add_opponent(IVec2::new(10, 20));
        let snap = Snapshot::capture(&state);
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"difficulty_name\": \"MEDIUM\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
