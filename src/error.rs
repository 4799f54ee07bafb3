//! Error types
//!
//! Configuration problems fail fast before a match exists. Commands that do not
//! apply to the current phase are rejected without touching state. Nothing in
//! the per-tick pipeline is an error.

use thiserror::Error;

use crate::sim::MatchPhase;

/// Invalid simulation configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Field too small to hold an actor (or non-positive)
    #[error("Invalid field dimensions {width}x{height}: each side must exceed the actor size {min}")]
    InvalidField { width: i32, height: i32, min: i32 },

    /// Tick interval of zero
    #[error("Tick interval must be positive")]
    ZeroTickInterval,

    /// Opponent cap of zero
    #[error("Opponent cap must be positive")]
    ZeroOpponentCap,

    /// Difficulty name not one of the presets
    #[error("Unknown difficulty preset: {0}")]
    UnknownDifficulty(String),

    /// Malformed JSON
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A command rejected by the match state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Difficulty index outside the preset list; prior selection retained
    #[error("Difficulty index {index} out of range (0..{count})")]
    DifficultyOutOfRange { index: usize, count: usize },

    /// Menu entry index outside the menu
    #[error("Menu index {0} out of range")]
    MenuOutOfRange(usize),

    /// Command not accepted in the current phase
    #[error("Command '{command}' not allowed while {phase:?}")]
    NotAllowed {
        command: &'static str,
        phase: MatchPhase,
    },
}
