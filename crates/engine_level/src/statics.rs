//! Static object descriptors.
//!
//! Levels carry a flat list of non-entity geometry — platforms, ladders,
//! hazards. Entities inspect these at spawn time (e.g. to snap onto a
//! platform) but never own or mutate them.

use engine_math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Descriptor for one piece of static level geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StaticObject {
    /// Numeric kind tag from the level file (platform, ladder, hazard, ...).
    pub kind: u32,
    /// World-space bounds.
    pub bounds: Rect,
    /// Whether entities collide with this object.
    pub solid: bool,
}

impl StaticObject {
    /// Create a solid object of the given kind.
    #[must_use]
    pub fn solid(kind: u32, bounds: Rect) -> Self {
        Self {
            kind,
            bounds,
            solid: true,
        }
    }

    /// Create a non-solid (decorative or trigger) object of the given kind.
    #[must_use]
    pub fn passable(kind: u32, bounds: Rect) -> Self {
        Self {
            kind,
            bounds,
            solid: false,
        }
    }

    /// Returns `true` if the point lies inside this object's bounds.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}
