//! Core trait definitions.

/// Marker trait for domain entities with a typed identifier.
pub trait Entity<Id> {
    /// Returns the entity's identifier.
    fn id(&self) -> &Id;
}
