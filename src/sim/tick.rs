//! Fixed-interval simulation tick
//!
//! One call to [`tick()`] is one full pipeline pass:
//! apply input -> movement -> opponent AI -> collisions -> spawner -> lifecycle.
//! Only `Playing` runs the pipeline; other phases only consume commands.

use super::direction::Direction;
use super::state::{MatchEvent, MatchPhase, MatchState};
use super::{ai, collision, movement, spawner};
use crate::difficulty::Difficulty;
use crate::error::CommandError;

/// Direction keys currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub right: bool,
    pub down: bool,
    pub left: bool,
}

impl HeldDirections {
    /// Net movement direction, `None` if nothing (or only opposing keys) held
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_flags(self.up, self.right, self.down, self.left)
    }
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub held: HeldDirections,
    /// Fire one player projectile
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Leave the pause screen for the menu
    pub cancel: bool,
    /// Dismiss the game-over screen
    pub acknowledge: bool,
    /// Menu entry chosen (see [`MenuItem`])
    pub menu_select: Option<usize>,
}

impl TickInput {
    /// Any discrete event present (held keys don't count)
    pub fn has_one_shot(&self) -> bool {
        self.fire || self.pause || self.cancel || self.acknowledge || self.menu_select.is_some()
    }
}

/// Entries of the title menu, by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    CycleDifficulty,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::CycleDifficulty, MenuItem::Quit];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "Start",
            MenuItem::CycleDifficulty => "Difficulty",
            MenuItem::Quit => "Quit",
        }
    }
}

fn require_menu(state: &MatchState, command: &'static str) -> Result<(), CommandError> {
    if state.phase == MatchPhase::Menu {
        Ok(())
    } else {
        Err(CommandError::NotAllowed {
            command,
            phase: state.phase,
        })
    }
}

/// Start a fresh match from the menu
pub fn start(state: &mut MatchState) -> Result<(), CommandError> {
    require_menu(state, "start")?;
    state.start_match();
    Ok(())
}

/// Advance to the next difficulty preset (menu only)
pub fn cycle_difficulty(state: &mut MatchState) -> Result<Difficulty, CommandError> {
    require_menu(state, "cycle difficulty")?;
    let next = state.difficulty.next();
    set_difficulty(state, next);
    Ok(next)
}

/// Choose a difficulty preset by index (menu only); out of range keeps the current one
pub fn select_difficulty(state: &mut MatchState, index: usize) -> Result<Difficulty, CommandError> {
    require_menu(state, "select difficulty")?;
    let difficulty = Difficulty::from_index(index).ok_or(CommandError::DifficultyOutOfRange {
        index,
        count: Difficulty::ALL.len(),
    })?;
    set_difficulty(state, difficulty);
    Ok(difficulty)
}

fn set_difficulty(state: &mut MatchState, difficulty: Difficulty) {
    state.difficulty = difficulty;
    log::info!("Difficulty set to {}", difficulty.as_str());
    state.events.push(MatchEvent::DifficultyChanged(difficulty));
}

/// Activate a menu entry by index
pub fn select_menu_item(state: &mut MatchState, index: usize) -> Result<MenuItem, CommandError> {
    require_menu(state, "menu select")?;
    let item = MenuItem::from_index(index).ok_or(CommandError::MenuOutOfRange(index))?;
    log::debug!("Menu: {}", item.label());
    match item {
        MenuItem::Start => start(state)?,
        MenuItem::CycleDifficulty => {
            cycle_difficulty(state)?;
        }
        MenuItem::Quit => {
            log::info!("Quit requested");
            state.quit_requested = true;
            state.events.push(MatchEvent::QuitRequested);
        }
    }
    Ok(item)
}

/// Advance the match by one tick
pub fn tick(state: &mut MatchState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        MatchPhase::Menu => {
            if let Some(index) = input.menu_select {
                if let Err(e) = select_menu_item(state, index) {
                    log::warn!("{e}");
                }
            }
            return;
        }
        MatchPhase::GameOver => {
            if input.has_one_shot() {
                state.set_phase(MatchPhase::Menu);
            }
            return;
        }
        MatchPhase::Paused => {
            if input.cancel {
                state.set_phase(MatchPhase::Menu);
                return;
            }
            if !input.pause {
                return;
            }
            state.set_phase(MatchPhase::Playing);
        }
        MatchPhase::Playing => {
            if input.pause {
                state.set_phase(MatchPhase::Paused);
                return;
            }
        }
    }

    state.time_ticks += 1;

    // Input is applied once, before anything moves
    state.player.steer(input.held.direction());
    if input.fire {
        state.player_fire();
    }

    movement::update(state);
    ai::update(state);
    collision::resolve(state);

    // Game over mid-tick: nothing else spawns
    if state.phase != MatchPhase::Playing {
        return;
    }

    spawner::update(state);
    update_lifecycle(state);
}

/// End the match once lives are exhausted
fn update_lifecycle(state: &mut MatchState) {
    if state.lives == 0 && state.phase == MatchPhase::Playing {
        state.set_phase(MatchPhase::GameOver);
    }
}
