//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one. `Money`, `Tax` and request items are value
/// objects; invoices and clients are entities.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for crate::Money {}
