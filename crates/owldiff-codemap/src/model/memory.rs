//! Declaration-ordered in-memory model.

use std::collections::HashMap;

use super::types::{Annotation, Entity, EntityKind, Iri};
use super::view::{ModelError, ModelView};

/// In-memory [`ModelView`] whose signature order is declaration order and
/// whose annotation order is assertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryModel {
    entities: Vec<Entity>,
    annotations: HashMap<Entity, Vec<Annotation>>,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity. Re-declaring is a no-op and keeps the original
    /// signature position.
    pub fn declare(&mut self, entity: Entity) {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
    }

    /// Attach an annotation to an entity, declaring the entity if needed.
    pub fn annotate(&mut self, entity: &Entity, annotation: Annotation) {
        self.declare(entity.clone());
        self.annotations
            .entry(entity.clone())
            .or_default()
            .push(annotation);
    }
}

impl ModelView for MemoryModel {
    fn signature(&self) -> Result<Vec<Entity>, ModelError> {
        Ok(self.entities.clone())
    }

    fn annotations(&self, entity: &Entity) -> Vec<Annotation> {
        self.annotations.get(entity).cloned().unwrap_or_default()
    }

    fn contains_annotation_property(&self, property: &Iri) -> bool {
        self.entities
            .iter()
            .any(|e| e.kind == EntityKind::AnnotationProperty && &e.iri == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Iri {
        Iri::parse(s).expect("parse ok")
    }

    #[test]
    fn signature_keeps_declaration_order() {
        let mut model = MemoryModel::new();
        let a = Entity::new(iri("http://example.org/a"), EntityKind::Class);
        let b = Entity::new(iri("http://example.org/b"), EntityKind::NamedIndividual);
        model.declare(a.clone());
        model.declare(b.clone());
        model.declare(a.clone()); // no-op

        assert_eq!(model.signature().expect("signature ok"), vec![a, b]);
    }

    #[test]
    fn annotate_declares_and_keeps_assertion_order() {
        let mut model = MemoryModel::new();
        let e = Entity::new(iri("http://example.org/e"), EntityKind::Class);
        let p = iri("http://example.org/code");
        model.annotate(&e, Annotation::literal(p.clone(), "first"));
        model.annotate(&e, Annotation::literal(p.clone(), "second"));

        assert_eq!(model.signature().expect("signature ok").len(), 1);
        let anns = model.annotations(&e);
        assert_eq!(anns.len(), 2);
        assert_eq!(anns[0].value.as_literal(), Some("first"));
        assert_eq!(anns[1].value.as_literal(), Some("second"));
    }

    #[test]
    fn annotation_property_signature_check() {
        let mut model = MemoryModel::new();
        let p = iri("http://example.org/code");
        // Same IRI declared as a class does not count.
        model.declare(Entity::new(p.clone(), EntityKind::Class));
        assert!(!model.contains_annotation_property(&p));

        model.declare(Entity::new(p.clone(), EntityKind::AnnotationProperty));
        assert!(model.contains_annotation_property(&p));
    }
}
