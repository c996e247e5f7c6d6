//! The session-scoped code-to-entity mapper.

use std::rc::Rc;

use once_cell::unsync::OnceCell;
use thiserror::Error;

use crate::config::{CODE_ANNOTATION_PROPERTY, Parameters};
use crate::model::{Entity, Iri, IriError, ModelError, ModelView};
use crate::session::DiffSession;

use super::build::{build_code_index, extract_code};
use super::types::CodeIndex;

/// Construction failure for the mapper. Missing or malformed configuration
/// is fatal here; a configured property merely absent from a model's
/// signature is not (see [`CodeToEntityMapper::code_not_present`]).
#[derive(Debug, Error)]
pub enum CodemapError {
    #[error("missing parameter '{CODE_ANNOTATION_PROPERTY}'")]
    MissingParameter,
    #[error("invalid code annotation property: {0}")]
    InvalidIri(#[from] IriError),
}

/// Maps comparison codes to the target-model entities carrying them.
///
/// The target index is built by a single full-signature scan on the first
/// lookup and then cached for the mapper's lifetime. The target model is
/// treated as a frozen snapshot: external mutation after the first lookup is
/// never observed, by design. Single-threaded, like the session owning it.
#[derive(Debug)]
pub struct CodeToEntityMapper<M> {
    source: Rc<M>,
    target: Rc<M>,
    code_property: Iri,
    index: OnceCell<CodeIndex>,
}

impl<M: ModelView + 'static> CodeToEntityMapper<M> {
    /// Validate the configured code annotation property and bind a mapper to
    /// a model pair. A model pair lacking the property in its signature is
    /// only warned about; such a mapper works and returns empty results.
    pub fn new(
        source: Rc<M>,
        target: Rc<M>,
        parameters: &Parameters,
    ) -> Result<Self, CodemapError> {
        let configured = parameters
            .code_annotation_property()
            .ok_or(CodemapError::MissingParameter)?;
        let code_property = Iri::parse(configured)?;
        if !source.contains_annotation_property(&code_property) {
            tracing::warn!(
                "source model does not declare code annotation property {}",
                code_property
            );
        }
        if !target.contains_annotation_property(&code_property) {
            tracing::warn!(
                "target model does not declare code annotation property {}",
                code_property
            );
        }
        Ok(CodeToEntityMapper {
            source,
            target,
            code_property,
            index: OnceCell::new(),
        })
    }

    /// Get-or-create the session's mapper. Repeated calls within one session
    /// return the same instance, and with it the same cached index.
    pub fn for_session(
        session: &DiffSession<M>,
        parameters: &Parameters,
    ) -> Result<Rc<Self>, CodemapError> {
        session.service_or_try_insert(|| Self::new(session.source(), session.target(), parameters))
    }

    /// The resolved code annotation property.
    pub fn code_property(&self) -> &Iri {
        &self.code_property
    }

    /// True when either model lacks the code annotation property in its
    /// signature. Callers may use this to skip code-based alignment; lookups
    /// on such a mapper still work and come back empty.
    pub fn code_not_present(&self) -> bool {
        !self.source.contains_annotation_property(&self.code_property)
            || !self.target.contains_annotation_property(&self.code_property)
    }

    /// The code of `entity` as asserted in `model` (either side of the
    /// session).
    pub fn code_of(&self, model: &M, entity: &Entity) -> Option<String> {
        extract_code(model, entity, &self.code_property)
    }

    /// Target-model entities carrying `code`; empty for unknown codes.
    ///
    /// The first call scans the target signature to build the index; later
    /// calls reuse it without rescanning. A failed scan propagates to the
    /// caller and is retried on the next call.
    pub fn target_entities(&self, code: &str) -> Result<&[Entity], ModelError> {
        Ok(self.target_index()?.entities(code))
    }

    /// The whole target index, building it on first use.
    pub fn target_index(&self) -> Result<&CodeIndex, ModelError> {
        self.index
            .get_or_try_init(|| build_code_index(self.target.as_ref(), &self.code_property))
    }
}
