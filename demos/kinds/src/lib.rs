//! Example entity kind definitions for the platformer engine.
//!
//! These demonstrate how to define entity kinds that satisfy the
//! [`EntityKind`] trait requirements: a catalog name, a numeric ID, and a
//! constructor that reads its [`SpawnContext`]. [`builtin_catalog`] bundles
//! them into a ready-to-use [`EntityCatalog`].

use engine_entity::{
    CatalogEntry, CatalogError, Entity, EntityCatalog, EntityError, EntityKind, KindId,
    SpawnContext,
};
use engine_math::Vec2;
use serde_json::Value;

/// The player avatar.
#[derive(Debug)]
pub struct Player {
    /// Current world-space position.
    pub position: Vec2,
    /// Remaining lives.
    pub lives: u32,
}

impl Entity for Player {
    fn kind_name(&self) -> &'static str {
        Self::NAME
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn apply_config(&mut self, config: &Value) -> Result<(), EntityError> {
        if let Some(lives) = config.get("lives") {
            let lives = lives
                .as_u64()
                .ok_or(EntityError::WrongFieldType {
                    field: "lives",
                    expected: "an unsigned integer",
                })?;
            self.lives = lives as u32;
        }
        Ok(())
    }
}

impl EntityKind for Player {
    const NAME: &'static str = "player";
    const ID: KindId = KindId(0);

    fn spawn(ctx: &SpawnContext<'_>) -> Self {
        Self {
            position: ctx.position,
            lives: 3,
        }
    }
}

/// A ground-walking enemy that patrols between solid objects.
#[derive(Debug)]
pub struct Slime {
    /// Current world-space position.
    pub position: Vec2,
    /// Hit points.
    pub hp: i64,
    /// Horizontal patrol speed in units per second.
    pub speed: f32,
}

impl Entity for Slime {
    fn kind_name(&self) -> &'static str {
        Self::NAME
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn apply_config(&mut self, config: &Value) -> Result<(), EntityError> {
        let hp = config.get("hp").ok_or(EntityError::MissingField("hp"))?;
        self.hp = hp.as_i64().ok_or(EntityError::WrongFieldType {
            field: "hp",
            expected: "an integer",
        })?;
        if let Some(speed) = config.get("speed") {
            self.speed = speed.as_f64().ok_or(EntityError::WrongFieldType {
                field: "speed",
                expected: "a number",
            })? as f32;
        }
        Ok(())
    }
}

impl EntityKind for Slime {
    const NAME: &'static str = "slime";
    const ID: KindId = KindId(1);

    fn spawn(ctx: &SpawnContext<'_>) -> Self {
        Self {
            position: ctx.position,
            hp: 2,
            speed: 16.0,
        }
    }
}

/// A collectible coin. Name-only: levels always reference coins by name,
/// so the kind carries no numeric ID.
#[derive(Debug)]
pub struct Coin {
    /// Current world-space position.
    pub position: Vec2,
}

impl Entity for Coin {
    fn kind_name(&self) -> &'static str {
        Self::NAME
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

impl EntityKind for Coin {
    const NAME: &'static str = "coin";
    const ID: KindId = KindId::UNASSIGNED;

    fn spawn(ctx: &SpawnContext<'_>) -> Self {
        Self {
            position: ctx.position,
        }
    }
}

/// A moving platform that snaps its spawn position onto the chip grid.
#[derive(Debug)]
pub struct Lift {
    /// Current world-space position.
    pub position: Vec2,
    /// Travel distance in chips.
    pub range: i64,
}

impl Entity for Lift {
    fn kind_name(&self) -> &'static str {
        Self::NAME
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn apply_config(&mut self, config: &Value) -> Result<(), EntityError> {
        let range = config
            .get("range")
            .ok_or(EntityError::MissingField("range"))?;
        self.range = range.as_i64().ok_or(EntityError::WrongFieldType {
            field: "range",
            expected: "an integer",
        })?;
        Ok(())
    }
}

impl EntityKind for Lift {
    const NAME: &'static str = "lift";
    const ID: KindId = KindId(8);

    fn spawn(ctx: &SpawnContext<'_>) -> Self {
        let chip = 16.0;
        Self {
            position: Vec2::new(
                (ctx.position.x / chip).floor() * chip,
                (ctx.position.y / chip).floor() * chip,
            ),
            range: 4,
        }
    }
}

/// Build a catalog holding every kind defined in this crate.
///
/// # Errors
///
/// Returns a [`CatalogError`] if two kinds declare the same assigned ID.
pub fn builtin_catalog() -> Result<EntityCatalog, CatalogError> {
    EntityCatalog::from_entries([
        CatalogEntry::of::<Player>(),
        CatalogEntry::of::<Slime>(),
        CatalogEntry::of::<Coin>(),
        CatalogEntry::of::<Lift>(),
    ])
}
