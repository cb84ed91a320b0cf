//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two item names
/// with the same text are the same key, regardless of where they were built.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName(String);
///
/// impl ValueObject for ItemName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
