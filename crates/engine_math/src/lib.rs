//! # engine_math
//!
//! Math types for the platformer engine. Re-exports [`glam`] for linear
//! algebra and defines engine-specific spatial types used by level data and
//! entity spawning.

pub mod rect;

// Re-export glam types for convenience.
pub use glam::{IVec2, Vec2};

pub use rect::Rect;
