//! Code-based entity lookup for ontology diffing.
//!
//! When two versions of an ontology are aligned, entities often carry an
//! external cross-reference key (a "code") on a designated annotation
//! property. This crate extracts those codes and serves "which target
//! entities carry this code?" lookups from an index built lazily by a single
//! scan of the target model's signature and cached for the session.
//!
//! The models themselves are external collaborators reached through the
//! [`model::ModelView`] accessor contract; this crate never mutates them and
//! treats the target as a frozen snapshot once the index is built.

pub mod codemap;
pub mod config;
pub mod model;
pub mod session;

pub use codemap::{CodeIndex, CodeToEntityMapper, CodemapError, build_code_index, extract_code};
pub use config::{CODE_ANNOTATION_PROPERTY, Parameters};
pub use model::{
    Annotation, AnnotationValue, Entity, EntityKind, Iri, IriError, MemoryModel, ModelError,
    ModelView,
};
pub use session::DiffSession;
