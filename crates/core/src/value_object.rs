//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: an order line
/// for order `o-1`, sku `7`, quantity `3` is interchangeable with any other
/// order line carrying the same three values, and hashes the same.
///
/// The `Eq + Hash` bounds let value objects be stored in sets, which is what
/// gives allocation its idempotence.
///
/// ```
/// use stockline_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Dimensions {
///     width: u32,
///     height: u32,
/// }
///
/// impl ValueObject for Dimensions {}
///
/// let a = Dimensions { width: 2, height: 3 };
/// assert_eq!(a, a.clone());
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
