//! Simulation configuration
//!
//! Loaded from JSON (any subset of fields) and validated before a match exists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::difficulty::Difficulty;
use crate::error::ConfigError;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Field width in pixels
    pub field_width: i32,
    /// Field height in pixels
    pub field_height: i32,
    /// Tick cadence of the external clock (ms); converts spawn intervals to ticks
    pub tick_ms: u32,
    /// RNG seed
    pub seed: u64,
    /// Initial difficulty preset name
    pub difficulty: String,
    /// Concurrent opponent cap
    pub max_opponents: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_ms: TICK_MS,
            seed: 0,
            difficulty: Difficulty::default().as_str().to_string(),
            max_opponents: MAX_OPPONENTS,
        }
    }
}

impl SimConfig {
    /// Default configuration with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The field must hold an actor, and the spawn band (top third) must be non-empty
        if self.field_width <= ACTOR_SIZE || self.field_height <= ACTOR_SIZE {
            return Err(ConfigError::InvalidField {
                width: self.field_width,
                height: self.field_height,
                min: ACTOR_SIZE,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.max_opponents == 0 {
            return Err(ConfigError::ZeroOpponentCap);
        }
        self.difficulty_preset()?;
        Ok(())
    }

    /// The configured difficulty preset
    pub fn difficulty_preset(&self) -> Result<Difficulty, ConfigError> {
        Difficulty::from_name(&self.difficulty)
            .ok_or_else(|| ConfigError::UnknownDifficulty(self.difficulty.clone()))
    }
}
