//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two instances with the same
/// attribute values are the same value. They are immutable by convention: to
/// "modify" one, build a new one. A line item on an order is a value object;
/// the order itself is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
