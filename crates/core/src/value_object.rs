//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// A value object carries no identity of its own: two instances with equal
/// attribute values are interchangeable. "Modifying" one means constructing
/// a new instance with the new values, never mutating in place, so value
/// objects are safe to share and to hold for the lifetime of a run.
///
/// An inventory record is the canonical example here: the (name, code,
/// expiration) attributes are the whole identity, and merging two records
/// produces a fresh one rather than touching either input.
///
/// The supertraits are the minimum a value needs to be compared, copied
/// around, and show up usefully in logs and test failures.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
