//! Catalog-layer error types.

use crate::entity::EntityError;
use crate::kind::KindId;

/// Errors that can occur while registering or spawning entity kinds.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An assigned kind ID collided with an already-registered entry.
    /// Registration is treated as a programming error and must abort.
    #[error("an entity kind with id {id} is already registered ('{existing}')")]
    DuplicateId {
        /// The colliding ID.
        id: KindId,
        /// Name of the entry that already holds the ID.
        existing: &'static str,
    },

    /// A spawn lookup by name found no matching entry.
    #[error("no entity kind named '{0}' is registered")]
    UnknownName(String),

    /// A spawn lookup by ID found no matching entry.
    #[error("no entity kind with id {0} is registered")]
    UnknownId(KindId),

    /// A freshly constructed entity rejected its configuration payload.
    #[error("entity '{name}' rejected its configuration")]
    Config {
        /// Kind name of the entity that failed.
        name: &'static str,
        /// The hook's validation error.
        #[source]
        source: EntityError,
    },
}
