//! Code extraction and the one-shot index scan.

use crate::model::{Entity, Iri, ModelError, ModelView};

use super::types::CodeIndex;

/// Extract the comparison code of `entity` as asserted in `model`.
///
/// The first annotation under `code_property` whose value is a literal wins;
/// matching annotations with non-literal values are skipped, and scanning
/// continues past them. Which annotation is "first" follows the model's
/// reported order, which is implementation-defined across model
/// implementations. Absence is a normal outcome, not an error.
pub fn extract_code<M: ModelView>(
    model: &M,
    entity: &Entity,
    code_property: &Iri,
) -> Option<String> {
    for annotation in model.annotations(entity) {
        if &annotation.property != code_property {
            continue;
        }
        if let Some(literal) = annotation.value.as_literal() {
            return Some(literal.to_string());
        }
    }
    None
}

/// Scan every entity in `model`'s signature once and group the coded ones.
///
/// Entities without a code under `code_property` appear nowhere in the
/// result, neither as a key nor in a group. Group contents follow scan
/// order. An un-enumerable signature is fatal and propagates.
pub fn build_code_index<M: ModelView>(
    model: &M,
    code_property: &Iri,
) -> Result<CodeIndex, ModelError> {
    let mut index = CodeIndex::default();
    for entity in model.signature()? {
        if let Some(code) = extract_code(model, &entity, code_property) {
            index.append(code, entity);
        }
    }
    Ok(index)
}
