use core::fmt;

use crate::{EntityKind, Snowflake};

/// Marker for entities an object cache may own behind a shared handle.
///
/// The trait carries no methods. Its value is the trait object: a cache can
/// hold `Box<dyn Cacheable>` entries of different entity types and drop any
/// of them through the one seam, with each entry running its own destructor.
///
/// Concrete entities embed a [`Managed`] base and implement the marker
/// themselves.
pub trait Cacheable: 'static {}

/// Common base of every identified API object.
///
/// Holds the typed identifier and nothing else. Concrete entities embed it
/// and delegate identity to it: two objects with the same id are the same
/// entity, whatever other state they carry.
pub struct Managed<K: EntityKind> {
    /// Unique identifier the remote service assigned to this object.
    pub id: Snowflake<K>,
}

impl<K: EntityKind> Managed<K> {
    /// Creates the base from an already-known identifier.
    pub const fn new(id: Snowflake<K>) -> Self {
        Self { id }
    }

    /// Returns the creation instant of this object as fractional seconds
    /// since the Unix epoch, recovered from its identifier.
    pub const fn created_at(&self) -> f64 {
        self.id.created_at()
    }
}

impl<K: EntityKind> Cacheable for Managed<K> {}

// Hand-written for the same reason as the identifier's impls: derives would
// demand the bounds on `K`.
impl<K: EntityKind> Clone for Managed<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: EntityKind> Copy for Managed<K> {}

impl<K: EntityKind> PartialEq for Managed<K> {
    /// Two objects are the same entity exactly when their ids are equal.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: EntityKind> Eq for Managed<K> {}

impl<K: EntityKind> Default for Managed<K> {
    /// A base bearing the empty identifier.
    fn default() -> Self {
        Self::new(Snowflake::EMPTY)
    }
}

impl<K: EntityKind> fmt::Debug for Managed<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Managed").field("id", &self.id).finish()
    }
}
