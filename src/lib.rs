//! Tank Arena - an 8-way tank combat simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, AI, spawning, collisions, match state)
//! - `difficulty`: The three fixed difficulty presets
//! - `config`: Validated, JSON-loadable simulation configuration
//! - `demo`: Autopilot input for headless/attract runs
//!
//! Rendering, windowing, input capture and the tick clock are collaborators
//! outside this crate. They drive [`sim::tick()`] and read a [`sim::Snapshot`].

pub mod config;
pub mod demo;
pub mod difficulty;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{CommandError, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Reference tick cadence of the external clock (milliseconds)
    pub const TICK_MS: u32 = 10;

    /// Reference field dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Actors are squares of this size
    pub const ACTOR_SIZE: i32 = 40;
    /// Player speed (pixels per tick per axis)
    pub const PLAYER_SPEED: i32 = 3;
    /// Opponent speed (pixels per tick per axis)
    pub const OPPONENT_SPEED: i32 = 1;
    /// Player spawn / reset point (top-left of the actor box)
    pub const PLAYER_SPAWN_X: i32 = 375;
    pub const PLAYER_SPAWN_Y: i32 = 500;

    /// Projectiles are squares of this size
    pub const PROJECTILE_SIZE: i32 = 6;
    pub const PROJECTILE_SPEED: i32 = 5;

    /// Effect marker growth
    pub const EFFECT_START_RADIUS: i32 = 5;
    pub const EFFECT_MAX_RADIUS: i32 = 30;
    pub const EFFECT_GROWTH: i32 = 2;

    /// Opponent wander: every N ticks, reroll heading with P% probability
    pub const WANDER_INTERVAL_TICKS: u32 = 100;
    pub const WANDER_CHANCE_PERCENT: u32 = 20;
    /// Opponent seek: every N ticks, head toward the player
    pub const SEEK_INTERVAL_TICKS: u32 = 300;

    /// Default concurrent opponent cap
    pub const MAX_OPPONENTS: usize = 5;

    pub const STARTING_LIVES: u32 = 3;
    pub const SCORE_PER_KILL: u32 = 10;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Screen-space angle (0° = +x, 90° = +y/down) to a compass bearing
/// (0° = up, 90° = right), both in degrees
#[inline]
pub fn screen_angle_to_bearing(angle: f64) -> f64 {
    normalize_degrees(angle + 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn test_screen_angle_to_bearing() {
        // Target to the right
        assert_eq!(screen_angle_to_bearing(0.0), 90.0);
        // Target below
        assert_eq!(screen_angle_to_bearing(90.0), 180.0);
        // Target above
        assert_eq!(screen_angle_to_bearing(-90.0), 0.0);
        // Target to the left
        assert_eq!(screen_angle_to_bearing(180.0), 270.0);
    }
}
