//! Kind identifiers, the registration marker trait, and spawn arguments.
//!
//! Entity kinds are registered statically: a type implements [`EntityKind`]
//! to declare its catalog name, numeric ID, and constructor. The catalog
//! captures the constructor as a plain function pointer at registration time,
//! so construction stays late-bound without any runtime type inspection.

use engine_level::{ChipGrid, StaticObject};
use engine_math::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityList};

/// Numeric identifier of an entity kind.
///
/// Level files reference entity kinds either by name or by this ID.
/// [`KindId::UNASSIGNED`] marks kinds that are only ever looked up by name;
/// it is exempt from the catalog's uniqueness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KindId(pub i32);

impl KindId {
    /// The "no ID assigned" sentinel.
    pub const UNASSIGNED: KindId = KindId(-1);

    /// Create a kind ID from a raw `i32`.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw `i32` identifier.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns `true` if this ID participates in the catalog's uniqueness
    /// check (i.e. it is not [`KindId::UNASSIGNED`]).
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != Self::UNASSIGNED.0
    }
}

impl std::fmt::Display for KindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The construction arguments handed to every entity factory.
///
/// Bundles exactly what a freshly spawned entity may inspect: its spawn
/// position, the level's static geometry, the chip grid, and the collection
/// it is being spawned into. All borrows last only for the duration of
/// construction — the spawned entity is returned by value.
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext<'a> {
    /// World-space spawn position.
    pub position: Vec2,
    /// Static object descriptors of the level.
    pub statics: &'a [StaticObject],
    /// The level's chip grid.
    pub chips: &'a ChipGrid,
    /// The collection the new entity will join.
    pub parent: &'a EntityList,
}

impl<'a> SpawnContext<'a> {
    /// Create a new spawn context.
    #[must_use]
    pub fn new(
        position: Vec2,
        statics: &'a [StaticObject],
        chips: &'a ChipGrid,
        parent: &'a EntityList,
    ) -> Self {
        Self {
            position,
            statics,
            chips,
            parent,
        }
    }
}

/// A stored entity constructor, captured at registration time.
pub type EntityFactory = fn(&SpawnContext<'_>) -> Box<dyn Entity>;

/// The registration marker.
///
/// Implementing this trait declares a type as a registrable entity kind with
/// a catalog name, a numeric ID, and a constructor. Nothing can be
/// instantiated through the catalog unless it is explicitly registered.
///
/// # Examples
///
/// ```rust
/// use engine_entity::{Entity, EntityKind, KindId, SpawnContext};
/// use engine_math::Vec2;
///
/// #[derive(Debug)]
/// struct Coin {
///     position: Vec2,
/// }
///
/// impl Entity for Coin {
///     fn kind_name(&self) -> &'static str {
///         Self::NAME
///     }
///
///     fn position(&self) -> Vec2 {
///         self.position
///     }
/// }
///
/// impl EntityKind for Coin {
///     const NAME: &'static str = "coin";
///     const ID: KindId = KindId(30);
///
///     fn spawn(ctx: &SpawnContext<'_>) -> Self {
///         Coin {
///             position: ctx.position,
///         }
///     }
/// }
/// ```
pub trait EntityKind: Entity + Sized + 'static {
    /// The unique catalog name of this kind, e.g. `"slime"`.
    const NAME: &'static str;

    /// The numeric kind ID, or [`KindId::UNASSIGNED`] for name-only kinds.
    const ID: KindId;

    /// Construct a fresh entity of this kind.
    fn spawn(ctx: &SpawnContext<'_>) -> Self;
}
