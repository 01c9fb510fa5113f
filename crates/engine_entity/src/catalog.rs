//! The entity catalog — registration, lookup, and factory-based spawning.
//!
//! The catalog is assembled once during startup from an explicit sequence of
//! registrations, then consulted by the level loader to construct live
//! entities by name or numeric ID. Storage is an insertion-ordered sequence:
//! name lookups return the first match, and assigned IDs are unique by
//! invariant.

use serde_json::Value;
use tracing::debug;

use crate::entity::Entity;
use crate::error::CatalogError;
use crate::kind::{EntityFactory, EntityKind, KindId, SpawnContext};

/// Metadata record describing one registered entity kind.
///
/// Entries are immutable values owned by the catalog. Entry identity is the
/// `(type_name, name, id)` triple; the factory pointer does not participate
/// in equality.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    name: &'static str,
    id: KindId,
    type_name: &'static str,
    factory: EntityFactory,
}

impl CatalogEntry {
    /// Build the entry for a kind, capturing its constructor.
    #[must_use]
    pub fn of<K: EntityKind>() -> Self {
        Self {
            name: K::NAME,
            id: K::ID,
            type_name: std::any::type_name::<K>(),
            factory: |ctx| Box::new(K::spawn(ctx)),
        }
    }

    /// The kind's catalog name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The kind's numeric ID.
    #[must_use]
    pub fn id(&self) -> KindId {
        self.id
    }

    /// The Rust type path of the registered kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Replace the lookup name, e.g. to register one type under an alias.
    #[must_use]
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Replace the numeric ID.
    #[must_use]
    pub fn with_id(mut self, id: KindId) -> Self {
        self.id = id;
        self
    }

    /// Construct a live entity using the stored factory.
    #[must_use]
    pub fn instantiate(&self, ctx: &SpawnContext<'_>) -> Box<dyn Entity> {
        (self.factory)(ctx)
    }
}

impl PartialEq for CatalogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.name == other.name && self.id == other.id
    }
}

impl Eq for CatalogEntry {}

/// The catalog of registered entity kinds.
///
/// Built once during a deterministic startup phase; entries may be added or
/// removed programmatically afterward. The catalog never tracks spawned
/// entities — ownership of every constructed entity transfers to the caller.
/// Access is assumed exclusive; no internal locking is performed.
#[derive(Debug, Default)]
pub struct EntityCatalog {
    entries: Vec<CatalogEntry>,
}

impl EntityCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assemble a catalog from a sequence of entries in one pass.
    ///
    /// # Errors
    ///
    /// Aborts with the first [`CatalogError::DuplicateId`] encountered,
    /// discarding the partially built catalog.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.add(entry)?;
        }
        Ok(catalog)
    }

    /// Register an entity kind.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the kind's assigned ID is
    /// already taken.
    pub fn register<K: EntityKind>(&mut self) -> Result<(), CatalogError> {
        self.add(CatalogEntry::of::<K>())
    }

    /// Add a catalog entry.
    ///
    /// An entry whose assigned ID is already present fails; a value-equal
    /// duplicate of an existing entry is silently ignored. The ID check runs
    /// first, so the silent path is only reachable for
    /// [`KindId::UNASSIGNED`] entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] on an ID collision; the catalog
    /// is left unchanged.
    pub fn add(&mut self, entry: CatalogEntry) -> Result<(), CatalogError> {
        if entry.id().is_assigned()
            && let Some(existing) = self.get_by_id(entry.id())
        {
            return Err(CatalogError::DuplicateId {
                id: entry.id(),
                existing: existing.name(),
            });
        }

        if self.contains(&entry) {
            return Ok(());
        }

        debug!(name = entry.name(), id = %entry.id(), "registered entity kind");
        self.entries.push(entry);
        Ok(())
    }

    /// Returns the first entry registered under `name`, in insertion order.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Returns the entry holding `id`.
    ///
    /// Assigned IDs are unique, so at most one entry matches; for
    /// [`KindId::UNASSIGNED`] the first match in insertion order wins.
    #[must_use]
    pub fn get_by_id(&self, id: KindId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Construct a live entity by kind name.
    ///
    /// Ownership of the new entity transfers to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] if no entry matches.
    pub fn spawn_by_name(
        &self,
        name: &str,
        ctx: &SpawnContext<'_>,
    ) -> Result<Box<dyn Entity>, CatalogError> {
        let entry = self
            .get_by_name(name)
            .ok_or_else(|| CatalogError::UnknownName(name.to_string()))?;
        debug!(name = entry.name(), id = %entry.id(), "spawning entity");
        Ok(entry.instantiate(ctx))
    }

    /// Construct a live entity by kind ID.
    ///
    /// Ownership of the new entity transfers to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownId`] if no entry matches.
    pub fn spawn_by_id(
        &self,
        id: KindId,
        ctx: &SpawnContext<'_>,
    ) -> Result<Box<dyn Entity>, CatalogError> {
        let entry = self.get_by_id(id).ok_or(CatalogError::UnknownId(id))?;
        debug!(name = entry.name(), id = %entry.id(), "spawning entity");
        Ok(entry.instantiate(ctx))
    }

    /// Construct a live entity by kind name, then apply a configuration
    /// payload if one is supplied.
    ///
    /// With `config == None` this behaves exactly like
    /// [`EntityCatalog::spawn_by_name`]; with `Some`, the entity's
    /// configuration hook is invoked exactly once before the entity is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownName`] on a failed lookup, or
    /// [`CatalogError::Config`] if the entity rejects the payload.
    pub fn spawn_by_name_configured(
        &self,
        name: &str,
        ctx: &SpawnContext<'_>,
        config: Option<&Value>,
    ) -> Result<Box<dyn Entity>, CatalogError> {
        let mut entity = self.spawn_by_name(name, ctx)?;
        configure(entity.as_mut(), config)?;
        Ok(entity)
    }

    /// Construct a live entity by kind ID, then apply a configuration
    /// payload if one is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownId`] on a failed lookup, or
    /// [`CatalogError::Config`] if the entity rejects the payload.
    pub fn spawn_by_id_configured(
        &self,
        id: KindId,
        ctx: &SpawnContext<'_>,
        config: Option<&Value>,
    ) -> Result<Box<dyn Entity>, CatalogError> {
        let mut entity = self.spawn_by_id(id, ctx)?;
        configure(entity.as_mut(), config)?;
        Ok(entity)
    }

    /// Number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if a value-equal entry is present.
    #[must_use]
    pub fn contains(&self, entry: &CatalogEntry) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Remove the first value-equal entry.
    ///
    /// Returns `true` if an entry was found and removed.
    pub fn remove(&mut self, entry: &CatalogEntry) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e == entry) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// The entries as a slice, in insertion order.
    ///
    /// Bulk copies are `entries().to_vec()`.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a EntityCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn configure(entity: &mut dyn Entity, config: Option<&Value>) -> Result<(), CatalogError> {
    if let Some(config) = config {
        entity
            .apply_config(config)
            .map_err(|source| CatalogError::Config {
                name: entity.kind_name(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use engine_level::{ChipGrid, StaticObject};
    use engine_math::{Rect, Vec2};
    use serde_json::json;

    use crate::entity::{EntityError, EntityList};

    use super::*;

    #[derive(Debug)]
    struct Slime {
        position: Vec2,
        hp: i64,
        config_applications: u32,
    }

    impl Entity for Slime {
        fn kind_name(&self) -> &'static str {
            Self::NAME
        }

        fn position(&self) -> Vec2 {
            self.position
        }

        fn apply_config(&mut self, config: &Value) -> Result<(), EntityError> {
            self.config_applications += 1;
            let hp = config.get("hp").ok_or(EntityError::MissingField("hp"))?;
            self.hp = hp.as_i64().ok_or(EntityError::WrongFieldType {
                field: "hp",
                expected: "an integer",
            })?;
            Ok(())
        }
    }

    impl EntityKind for Slime {
        const NAME: &'static str = "slime";
        const ID: KindId = KindId(1);

        fn spawn(ctx: &SpawnContext<'_>) -> Self {
            Self {
                position: ctx.position,
                hp: 3,
                config_applications: 0,
            }
        }
    }

    /// Records what it observed in the spawn context.
    #[derive(Debug)]
    struct Probe {
        position: Vec2,
        statics_seen: usize,
        first_chip: Option<u8>,
        siblings: usize,
    }

    impl Entity for Probe {
        fn kind_name(&self) -> &'static str {
            Self::NAME
        }

        fn position(&self) -> Vec2 {
            self.position
        }
    }

    impl EntityKind for Probe {
        const NAME: &'static str = "probe";
        const ID: KindId = KindId(42);

        fn spawn(ctx: &SpawnContext<'_>) -> Self {
            Self {
                position: ctx.position,
                statics_seen: ctx.statics.len(),
                first_chip: ctx.chips.get(0, 0, 0),
                siblings: ctx.parent.len(),
            }
        }
    }

    #[derive(Debug)]
    struct Decoration {
        position: Vec2,
    }

    impl Entity for Decoration {
        fn kind_name(&self) -> &'static str {
            Self::NAME
        }

        fn position(&self) -> Vec2 {
            self.position
        }
    }

    impl EntityKind for Decoration {
        const NAME: &'static str = "decoration";
        const ID: KindId = KindId::UNASSIGNED;

        fn spawn(ctx: &SpawnContext<'_>) -> Self {
            Self {
                position: ctx.position,
            }
        }
    }

    fn fixture_level() -> (Vec<StaticObject>, ChipGrid, EntityList) {
        let statics = vec![StaticObject::solid(
            1,
            Rect::from_position_size(Vec2::ZERO, Vec2::new(64.0, 8.0)),
        )];
        let mut chips = ChipGrid::new(1, 4, 4);
        chips.set(0, 0, 0, 7);
        (statics, chips, EntityList::new())
    }

    #[test]
    fn test_register_and_get_by_id() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();
        catalog.register::<Probe>().unwrap();

        assert_eq!(catalog.get_by_id(KindId(1)).unwrap().name(), "slime");
        assert_eq!(catalog.get_by_id(KindId(42)).unwrap().name(), "probe");
        assert!(catalog.get_by_id(KindId(99)).is_none());
    }

    #[test]
    fn test_get_by_name() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();

        assert_eq!(catalog.get_by_name("slime").unwrap().id(), KindId(1));
        assert!(catalog.get_by_name("ghost").is_none());
    }

    #[test]
    fn test_duplicate_assigned_id_is_rejected() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();

        let err = catalog
            .add(CatalogEntry::of::<Probe>().with_id(KindId(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId {
                id: KindId(1),
                existing: "slime",
            }
        ));
        // The failed add must leave the catalog unchanged.
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_unassigned_ids_never_collide() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Decoration>().unwrap();
        catalog
            .add(CatalogEntry::of::<Decoration>().with_name("backdrop"))
            .unwrap();
        catalog
            .add(CatalogEntry::of::<Decoration>().with_name("foliage"))
            .unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_value_equal_duplicate_is_a_noop() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Decoration>().unwrap();
        // Same type, name, and (unassigned) id — silently ignored.
        catalog.register::<Decoration>().unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_value_equal_duplicate_with_assigned_id_hits_the_id_check() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();
        // The ID check runs before duplicate suppression.
        let err = catalog.register::<Slime>().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_entry_equality_is_by_value() {
        let a = CatalogEntry::of::<Slime>();
        let b = CatalogEntry::of::<Slime>();
        assert_eq!(a, b);
        assert_ne!(a, b.with_id(KindId(2)));
        assert_ne!(a, CatalogEntry::of::<Slime>().with_name("blob"));
        assert_ne!(a, CatalogEntry::of::<Probe>());
    }

    #[test]
    fn test_first_match_wins_for_shared_names() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();
        catalog
            .add(CatalogEntry::of::<Probe>().with_name("slime").with_id(KindId(2)))
            .unwrap();

        // Two entries share the name; lookup returns the earlier one.
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get_by_name("slime").unwrap().id(), KindId(1));
    }

    #[test]
    fn test_from_entries_aborts_on_duplicate_id() {
        let result = EntityCatalog::from_entries([
            CatalogEntry::of::<Slime>(),
            CatalogEntry::of::<Probe>().with_id(KindId(1)),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { id: KindId(1), .. })
        ));
    }

    #[test]
    fn test_spawn_by_name_unknown() {
        let catalog = EntityCatalog::new();
        let (statics, chips, parent) = fixture_level();
        let ctx = SpawnContext::new(Vec2::ZERO, &statics, &chips, &parent);

        let err = catalog.spawn_by_name("ghost", &ctx).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownName(name) if name == "ghost"));
    }

    #[test]
    fn test_spawn_by_id_unknown() {
        let catalog = EntityCatalog::new();
        let (statics, chips, parent) = fixture_level();
        let ctx = SpawnContext::new(Vec2::ZERO, &statics, &chips, &parent);

        let err = catalog.spawn_by_id(KindId(5), &ctx).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownId(KindId(5))));
    }

    #[test]
    fn test_spawn_by_id_constructs_with_the_exact_context() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Probe>().unwrap();

        let (statics, chips, mut parent) = fixture_level();
        parent.push(Box::new(Decoration {
            position: Vec2::ZERO,
        }));
        let ctx = SpawnContext::new(Vec2::new(32.0, 16.0), &statics, &chips, &parent);

        let entity = catalog.spawn_by_id(KindId(42), &ctx).unwrap();
        assert_eq!(entity.kind_name(), "probe");
        assert_eq!(entity.position(), Vec2::new(32.0, 16.0));

        let debug = format!("{entity:?}");
        // The probe recorded every part of the context it was handed.
        assert!(debug.contains("statics_seen: 1"));
        assert!(debug.contains("first_chip: Some(7)"));
        assert!(debug.contains("siblings: 1"));
    }

    #[test]
    fn test_configured_spawn_applies_the_payload_once() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();

        let (statics, chips, parent) = fixture_level();
        let ctx = SpawnContext::new(Vec2::ZERO, &statics, &chips, &parent);

        let payload = json!({ "hp": 10 });
        let entity = catalog
            .spawn_by_name_configured("slime", &ctx, Some(&payload))
            .unwrap();

        let debug = format!("{entity:?}");
        assert!(debug.contains("hp: 10"));
        assert!(debug.contains("config_applications: 1"));
    }

    #[test]
    fn test_spawn_without_payload_never_invokes_the_hook() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();

        let (statics, chips, parent) = fixture_level();
        let ctx = SpawnContext::new(Vec2::ZERO, &statics, &chips, &parent);

        let entity = catalog
            .spawn_by_id_configured(KindId(1), &ctx, None)
            .unwrap();

        let debug = format!("{entity:?}");
        assert!(debug.contains("hp: 3"));
        assert!(debug.contains("config_applications: 0"));
    }

    #[test]
    fn test_config_rejection_surfaces_as_an_error() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();

        let (statics, chips, parent) = fixture_level();
        let ctx = SpawnContext::new(Vec2::ZERO, &statics, &chips, &parent);

        let payload = json!({ "speed": 2 });
        let err = catalog
            .spawn_by_name_configured("slime", &ctx, Some(&payload))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Config {
                name: "slime",
                source: EntityError::MissingField("hp"),
            }
        ));

        let payload = json!({ "hp": "lots" });
        let err = catalog
            .spawn_by_name_configured("slime", &ctx, Some(&payload))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Config {
                source: EntityError::WrongFieldType { field: "hp", .. },
                ..
            }
        ));
    }

    #[test]
    fn test_remove_then_lookup_fails() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();
        catalog.register::<Probe>().unwrap();

        let entry = CatalogEntry::of::<Slime>();
        assert!(catalog.remove(&entry));
        assert!(catalog.get_by_id(KindId(1)).is_none());
        assert_eq!(catalog.len(), 1);

        // Removing again finds nothing.
        assert!(!catalog.remove(&entry));
    }

    #[test]
    fn test_contains() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();

        assert!(catalog.contains(&CatalogEntry::of::<Slime>()));
        assert!(!catalog.contains(&CatalogEntry::of::<Probe>()));
    }

    #[test]
    fn test_clear() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();
        catalog.register::<Probe>().unwrap();
        catalog.clear();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Probe>().unwrap();
        catalog.register::<Slime>().unwrap();
        catalog.register::<Decoration>().unwrap();

        let names: Vec<&str> = catalog.iter().map(CatalogEntry::name).collect();
        assert_eq!(names, vec!["probe", "slime", "decoration"]);

        let names: Vec<&str> = (&catalog).into_iter().map(CatalogEntry::name).collect();
        assert_eq!(names, vec!["probe", "slime", "decoration"]);
    }

    #[test]
    fn test_entries_slice_supports_bulk_copy() {
        let mut catalog = EntityCatalog::new();
        catalog.register::<Slime>().unwrap();
        catalog.register::<Probe>().unwrap();

        let copied: Vec<CatalogEntry> = catalog.entries().to_vec();
        assert_eq!(copied.len(), 2);
        assert_eq!(copied[0], CatalogEntry::of::<Slime>());
    }
}
