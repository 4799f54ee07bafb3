//! Axis-aligned boxes and the playing field
//!
//! Positions are integer pixels in screen space: origin at the top-left,
//! +x right, +y down. A box covers `[x, x + w) × [y, y + h)`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Exclusive bottom-right corner
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.pos + self.size
    }

    /// Center point (rounded toward the top-left)
    #[inline]
    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// True if the interiors overlap; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x && other.pos.x < a_max.x && self.pos.y < b_max.y && other.pos.y < a_max.y
    }
}

/// The fixed playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: crate::consts::FIELD_WIDTH,
            height: crate::consts::FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Clamp a box position so a box of `size` stays fully inside the field
    pub fn clamp_pos(&self, pos: IVec2, size: IVec2) -> IVec2 {
        let max = (IVec2::new(self.width, self.height) - size).max(IVec2::ZERO);
        pos.clamp(IVec2::ZERO, max)
    }

    /// True if a point lies in the closed field rectangle `[0, w] × [0, h]`
    pub fn contains_point(&self, p: IVec2) -> bool {
        p.x >= 0 && p.x <= self.width && p.y >= 0 && p.y <= self.height
    }
}
