//! Autopilot input for headless and attract-mode runs
//!
//! Stands in for the keyboard: lines up under the nearest opponent, turns to
//! face up and fires on a cadence, then drifts back toward the spawn row.

use crate::consts::{PLAYER_SPAWN_Y, PLAYER_SPEED};
use crate::sim::{HeldDirections, MatchPhase, MatchState, MenuItem, TickInput};

/// How far above the spawn row the autopilot is willing to climb
const MAX_CLIMB: i32 = 60;

/// Scripted player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks between shots
    pub fire_interval: u32,
    cooldown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Autopilot {
    pub fn new(fire_interval: u32) -> Self {
        Self {
            fire_interval,
            cooldown: 0,
        }
    }

    /// Input for the next tick
    pub fn input(&mut self, state: &MatchState) -> TickInput {
        match state.phase {
            MatchPhase::Menu => TickInput {
                menu_select: Some(MenuItem::Start as usize),
                ..Default::default()
            },
            MatchPhase::Paused => TickInput {
                pause: true,
                ..Default::default()
            },
            MatchPhase::GameOver => TickInput::default(),
            MatchPhase::Playing => self.steer(state),
        }
    }

    fn steer(&mut self, state: &MatchState) -> TickInput {
        self.cooldown = self.cooldown.saturating_sub(1);

        let me = state.player.center();
        let target = state
            .opponents
            .iter()
            .min_by_key(|o| (o.center().x - me.x).abs())
            .map(|o| o.center());

        let mut held = HeldDirections::default();
        let mut fire = false;

        match target {
            Some(t) if (t.x - me.x).abs() > PLAYER_SPEED => {
                held.left = t.x < me.x;
                held.right = t.x > me.x;
            }
            Some(t) if t.y < me.y && self.cooldown == 0 => {
                // Face up for this shot
                held.up = true;
                fire = true;
                self.cooldown = self.fire_interval;
            }
            _ => {}
        }

        if !held.up && state.player.pos.y < PLAYER_SPAWN_Y - MAX_CLIMB {
            held.down = true;
        }

        TickInput {
            held,
            fire,
            ..Default::default()
        }
    }
}
