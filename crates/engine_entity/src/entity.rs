//! Entity capability trait and the owning entity collection.
//!
//! A live entity is anything spawned into a level: enemies, items, moving
//! platforms. The catalog hands out entities as boxed trait objects; the
//! level loader owns them through an [`EntityList`].

use engine_math::Vec2;
use serde_json::Value;

/// Errors an entity can report while applying a configuration payload.
///
/// Validation of required fields is the hook's contract — the catalog passes
/// payloads through untouched.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    /// A required config field was absent.
    #[error("missing required config field '{0}'")]
    MissingField(&'static str),

    /// A config field was present but had the wrong type.
    #[error("config field '{field}' must be {expected}")]
    WrongFieldType {
        /// The offending field.
        field: &'static str,
        /// What the hook expected, e.g. `"an integer"`.
        expected: &'static str,
    },
}

/// The capability contract every live entity satisfies.
///
/// Entities are constructed through the catalog's stored factories and are
/// owned by the caller from that point on.
pub trait Entity: std::fmt::Debug {
    /// The kind name this entity was registered under, e.g. `"slime"`.
    fn kind_name(&self) -> &'static str;

    /// Current world-space position.
    fn position(&self) -> Vec2;

    /// Apply a level-file configuration payload to this entity.
    ///
    /// Called at most once, immediately after construction, and only when the
    /// level supplies a payload for this placement. The default
    /// implementation accepts any payload unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if a required field is missing or has the
    /// wrong type.
    fn apply_config(&mut self, _config: &Value) -> Result<(), EntityError> {
        Ok(())
    }
}

/// An ordered, owning collection of live entities.
///
/// The level loader owns one list per level. During spawning the catalog
/// borrows it so new entities can inspect their future siblings; the spawned
/// entity itself is returned to the caller, who decides whether to push it.
#[derive(Debug, Default)]
pub struct EntityList {
    entities: Vec<Box<dyn Entity>>,
}

impl EntityList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Append an entity, taking ownership.
    pub fn push(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    /// Number of entities in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the list holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over the entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entities.iter().map(|e| e.as_ref())
    }

    /// Iterate mutably over the entities in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Entity + 'static)> + '_ {
        self.entities.iter_mut().map(|e| e.as_mut())
    }

    /// Drop every entity in the list.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}
