//! # engine_level
//!
//! Level data shapes for the platformer engine.
//!
//! This crate provides:
//!
//! - [`ChipGrid`] — the layered 2D grid of map chip bytes a level is built
//!   from.
//! - [`StaticObject`] — descriptor for non-entity level geometry (platforms,
//!   ladders, hazards).
//!
//! Entities receive both at spawn time; the shapes live here so the entity
//! layer does not depend on any particular level file format.

pub mod chips;
pub mod statics;

pub use chips::{ChipGrid, ChipGridError};
pub use statics::StaticObject;
