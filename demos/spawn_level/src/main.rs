//! Spawn level — populates a small level through the entity catalog.
//!
//! This binary demonstrates the full load path: build the built-in catalog,
//! lay out a chip grid and static geometry, then spawn entities by name and
//! by numeric ID, applying per-placement config payloads where the level
//! provides them.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine_entity::{EntityList, KindId, SpawnContext};
use engine_level::{ChipGrid, StaticObject};
use engine_math::{Rect, Vec2};
use kinds::builtin_catalog;
use serde_json::json;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("spawn_level=info".parse()?))
        .init();

    let catalog = builtin_catalog()?;
    info!(kinds = catalog.len(), "catalog ready");

    // A one-layer 16x8 grid with a solid floor row along the bottom.
    let mut chips = ChipGrid::new(1, 16, 8);
    for x in 0..16 {
        chips.set(0, x, 7, 1);
    }

    let statics = [
        StaticObject::solid(0, Rect::from_position_size(Vec2::ZERO, Vec2::new(256.0, 16.0))),
        StaticObject::passable(1, Rect::from_position_size(Vec2::new(96.0, 48.0), Vec2::new(32.0, 8.0))),
    ];

    let mut entities = EntityList::new();

    // Placements as a level file would list them: some by name, some by ID,
    // some carrying a config payload.
    let player = catalog.spawn_by_name(
        "player",
        &SpawnContext::new(Vec2::new(16.0, 96.0), &statics, &chips, &entities),
    )?;
    info!(position = ?player.position(), "spawned player");
    entities.push(player);

    let slime = catalog.spawn_by_id_configured(
        KindId(1),
        &SpawnContext::new(Vec2::new(128.0, 96.0), &statics, &chips, &entities),
        Some(&json!({ "hp": 4, "speed": 24.0 })),
    )?;
    info!(position = ?slime.position(), "spawned slime");
    entities.push(slime);

    for x in [64.0, 80.0, 96.0] {
        let coin = catalog.spawn_by_name(
            "coin",
            &SpawnContext::new(Vec2::new(x, 64.0), &statics, &chips, &entities),
        )?;
        entities.push(coin);
    }

    let lift = catalog.spawn_by_id_configured(
        KindId(8),
        &SpawnContext::new(Vec2::new(200.0, 90.0), &statics, &chips, &entities),
        Some(&json!({ "range": 6 })),
    )?;
    info!(position = ?lift.position(), "spawned lift");
    entities.push(lift);

    info!(count = entities.len(), "level populated");
    for entity in entities.iter() {
        info!(kind = entity.kind_name(), position = ?entity.position(), "entity");
    }

    Ok(())
}
