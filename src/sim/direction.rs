//! 8-way direction vocabulary
//!
//! Directions carry a unit step vector in screen space (+y is down) and a
//! compass bearing (0° = up, clockwise).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Width of each direction sector in degrees
const SECTOR_DEGREES: f64 = 45.0;

/// One of the eight movement/aim orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions in clockwise order starting at `Up`
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Unit step vector, each component in {-1, 0, 1}
    pub fn vector(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::UpRight => IVec2::new(1, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::DownRight => IVec2::new(1, 1),
            Direction::Down => IVec2::new(0, 1),
            Direction::DownLeft => IVec2::new(-1, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::UpLeft => IVec2::new(-1, -1),
        }
    }

    /// Center bearing of this direction's sector, in degrees
    pub fn bearing(&self) -> f64 {
        self.index() as f64 * SECTOR_DEGREES
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or(0)
    }

    /// Quantize a compass bearing (degrees, any finite value) to the nearest direction.
    ///
    /// Each sector spans `[center - 22.5, center + 22.5)`; a value exactly on a
    /// boundary belongs to the sector that begins there. Non-finite input maps to `Up`.
    pub fn from_angle(angle: f64) -> Self {
        if !angle.is_finite() {
            return Direction::Up;
        }
        let a = normalize_degrees(angle);
        let sector = ((a + SECTOR_DEGREES / 2.0) / SECTOR_DEGREES).floor() as usize % 8;
        Self::ALL[sector]
    }

    /// Direction from held input flags; `None` when nothing (net) is held.
    ///
    /// Opposing flags cancel out on their axis.
    pub fn from_flags(up: bool, right: bool, down: bool, left: bool) -> Option<Self> {
        let dx = right as i32 - left as i32;
        let dy = down as i32 - up as i32;
        Self::from_vector(IVec2::new(dx, dy))
    }

    /// Direction whose step vector has the same signs as `v`; `None` for zero
    pub fn from_vector(v: IVec2) -> Option<Self> {
        let step = v.signum();
        Self::ALL.into_iter().find(|d| d.vector() == step)
    }
}
