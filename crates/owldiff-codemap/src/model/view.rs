//! Accessor contract consumed from the external model component.

use thiserror::Error;

use super::types::{Annotation, Entity, Iri};

/// Failure to read a model while building the index.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model signature unavailable: {0}")]
    SignatureUnavailable(String),
}

/// Read-only view of one side of a comparison session.
///
/// Implementations are treated as frozen snapshots: the code index built
/// from a view is never refreshed, so mutating the underlying model after
/// the first lookup leaves the index stale by design.
pub trait ModelView {
    /// Every declared entity, regardless of kind, in the model's own
    /// iteration order. The order is not required to be stable across
    /// implementations, only internally consistent within one call.
    fn signature(&self) -> Result<Vec<Entity>, ModelError>;

    /// Annotations asserted on `entity` in this model, in the model's
    /// natural order.
    fn annotations(&self, entity: &Entity) -> Vec<Annotation>;

    /// Whether `property` occurs in this model's signature as an annotation
    /// property.
    fn contains_annotation_property(&self, property: &Iri) -> bool;
}
