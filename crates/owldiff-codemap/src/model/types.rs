//! Ontology vocabulary: IRIs, entities, annotations.

use std::fmt;

use thiserror::Error;

/// Rejection reasons for strings that cannot serve as identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IriError {
    #[error("empty IRI")]
    Empty,
    #[error("IRI contains whitespace: {0:?}")]
    Whitespace(String),
    #[error("IRI has no scheme separator: {0:?}")]
    MissingScheme(String),
}

/// Absolute IRI identifying an entity or annotation property.
///
/// The string is kept as-is apart from validation; no normalization or
/// resolution is applied, so two IRIs are equal only when their text is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    /// Validate and wrap an IRI string. Rejects empty strings, embedded
    /// whitespace, and values without a scheme separator.
    pub fn parse(s: impl Into<String>) -> Result<Self, IriError> {
        let s = s.into();
        if s.is_empty() {
            return Err(IriError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(IriError::Whitespace(s));
        }
        if !s.contains(':') {
            return Err(IriError::MissingScheme(s));
        }
        Ok(Iri(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The declared kinds of ontology entity. The code index treats all kinds
/// alike; the kind only participates in entity identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    Datatype,
}

/// An identifiable element declared in a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub iri: Iri,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(iri: Iri, kind: EntityKind) -> Self {
        Entity { iri, kind }
    }
}

/// Value side of an annotation: a literal or a reference to another IRI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Literal(String),
    Iri(Iri),
}

impl AnnotationValue {
    /// The literal content, if this value is a literal. IRI references are
    /// never stringified.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            AnnotationValue::Literal(s) => Some(s),
            AnnotationValue::Iri(_) => None,
        }
    }
}

/// A property/value pair attached to an entity within one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub property: Iri,
    pub value: AnnotationValue,
}

impl Annotation {
    pub fn new(property: Iri, value: AnnotationValue) -> Self {
        Annotation { property, value }
    }

    /// Convenience constructor for a literal-valued annotation.
    pub fn literal(property: Iri, value: impl Into<String>) -> Self {
        Annotation::new(property, AnnotationValue::Literal(value.into()))
    }

    /// Convenience constructor for an IRI-valued annotation.
    pub fn reference(property: Iri, value: Iri) -> Self {
        Annotation::new(property, AnnotationValue::Iri(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_parse_accepts_absolute() {
        let iri = Iri::parse("http://example.org/code").expect("parse ok");
        assert_eq!(iri.as_str(), "http://example.org/code");
        assert_eq!(iri.to_string(), "http://example.org/code");
    }

    #[test]
    fn iri_parse_rejects_bad_input() {
        assert_eq!(Iri::parse(""), Err(IriError::Empty));
        assert!(matches!(
            Iri::parse("http://example.org/a b"),
            Err(IriError::Whitespace(_))
        ));
        assert!(matches!(
            Iri::parse("no-scheme-here"),
            Err(IriError::MissingScheme(_))
        ));
    }

    #[test]
    fn only_literals_yield_strings() {
        let lit = AnnotationValue::Literal("C73".into());
        assert_eq!(lit.as_literal(), Some("C73"));

        let reference =
            AnnotationValue::Iri(Iri::parse("http://example.org/other").expect("parse ok"));
        assert_eq!(reference.as_literal(), None);
    }
}
