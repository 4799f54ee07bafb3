//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One pipeline pass per external tick
//! - Seeded RNG only
//! - Stable iteration order (collection order, ids increase monotonically)
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod direction;
pub mod movement;
pub mod rect;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::CollisionReport;
pub use direction::Direction;
pub use rect::{Field, Rect};
pub use snapshot::{ActorPose, EffectPose, ProjectilePose, Snapshot};
pub use state::{
    Actor, ActorKind, Effect, MatchEvent, MatchPhase, MatchState, OpponentAi, Projectile,
};
pub use tick::{
    HeldDirections, MenuItem, TickInput, cycle_difficulty, select_difficulty, select_menu_item,
    start, tick,
};
