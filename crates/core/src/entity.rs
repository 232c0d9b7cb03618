//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implementors compare and hash by `id()` only. Deriving `PartialEq`/`Hash`
/// over every field is wrong for an entity: two snapshots of the same batch
/// with different allocations are still the same batch.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity, regardless of its state.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
