//! Difficulty presets
//!
//! Three fixed presets, cyclable from the menu. The core never invents new ones.

use serde::{Deserialize, Serialize};

/// Pacing parameters of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Minimum time between opponent spawns (milliseconds)
    pub spawn_interval_ms: u32,
    /// Fire-rate parameter; per-tick fire chance is `fire_rate / 10` percent
    pub fire_rate: u32,
    /// Max concurrent opponent-fired projectiles
    pub max_projectiles: usize,
}

/// Difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Preset at a menu index, `None` if out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Next preset in the menu cycle (EASY -> MEDIUM -> HARD -> EASY)
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                spawn_interval_ms: 1500,
                fire_rate: 80,
                max_projectiles: 2,
            },
            Difficulty::Medium => DifficultyProfile {
                spawn_interval_ms: 1000,
                fire_rate: 50,
                max_projectiles: 3,
            },
            Difficulty::Hard => DifficultyProfile {
                spawn_interval_ms: 700,
                fire_rate: 30,
                max_projectiles: 5,
            },
        }
    }
}

impl DifficultyProfile {
    /// Per-tick fire chance in percent.
    ///
    /// Integer division is intentional: the chance moves in whole-percent steps
    /// of the fire-rate parameter (EASY 8%, MEDIUM 5%, HARD 3%).
    pub fn fire_chance_percent(&self) -> u32 {
        self.fire_rate / 10
    }
}
