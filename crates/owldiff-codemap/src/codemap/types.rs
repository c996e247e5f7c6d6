//! The code→entity index.

use std::collections::HashMap;

use crate::model::Entity;

/// Immutable mapping from code string to the entities carrying that code.
///
/// Built once by a full-signature scan; lookups never observe mutation after
/// that. Each group keeps the scan's insertion order; the order of groups
/// relative to each other is meaningless.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeIndex {
    groups: HashMap<String, Vec<Entity>>,
}

impl CodeIndex {
    /// Entities carrying `code`. Empty for codes never seen in the scan,
    /// never an absence marker.
    pub fn entities(&self, code: &str) -> &[Entity] {
        self.groups.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.groups.contains_key(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate the distinct codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub(crate) fn append(&mut self, code: String, entity: Entity) {
        self.groups.entry(code).or_default().push(entity);
    }
}
