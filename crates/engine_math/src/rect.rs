//! 2D axis-aligned rectangle.
//!
//! [`Rect`] represents an axis-aligned bounding box in world space. Level
//! geometry and entity hitboxes are described with it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned rectangle described by its minimum and maximum corners.
///
/// Containment is half-open: a point on the `min` edge is inside, a point on
/// the `max` edge is not. Adjacent tiles therefore never claim the same point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    /// Minimum (bottom-left) corner.
    pub min: Vec2,
    /// Maximum (top-right) corner.
    pub max: Vec2,
}

impl Rect {
    /// The zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Create a rectangle from its corners.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its minimum corner and size.
    #[must_use]
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Size as a vector.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns `true` if the point lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Returns `true` if the two rectangles overlap.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Translate the rectangle by the given offset.
    #[must_use]
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.min += offset;
        self.max += offset;
        self
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::ZERO
    }
}
