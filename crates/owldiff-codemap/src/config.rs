//! Session parameters loaded from TOML.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use toml::Value as TomlValue;

/// Key naming the annotation property that carries comparison codes. This is
/// the only option this crate recognizes.
pub const CODE_ANNOTATION_PROPERTY: &str = "code.annotation.property";

/// Open key/value parameter bag for a comparison session.
///
/// Keys are dotted paths into the underlying TOML tables, so
/// `code.annotation.property = "..."` and the equivalent nested-table form
/// resolve identically. Unrecognized keys are tolerated and ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Parameters {
    #[serde(flatten)]
    values: BTreeMap<String, TomlValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a string value at a dotted path. Non-string leaves are not
    /// parameter values and yield `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = self.lookup(key)?;
        let s = value.as_str();
        if s.is_none() {
            tracing::debug!("parameter '{}' is not a string; ignoring", key);
        }
        s
    }

    /// Set a string value under a dotted key.
    pub fn set_str(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), TomlValue::String(value.into()));
    }

    /// The configured code annotation property, if any.
    pub fn code_annotation_property(&self) -> Option<&str> {
        self.get(CODE_ANNOTATION_PROPERTY)
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    // A key set via `set_str` or a quoted TOML key lives at the top level
    // verbatim; otherwise descend dotted segments through nested tables.
    fn lookup(&self, key: &str) -> Option<&TomlValue> {
        if let Some(value) = self.values.get(key) {
            return Some(value);
        }
        let (first, rest) = key.split_once('.')?;
        let mut current = self.values.get(first)?;
        for part in rest.split('.') {
            current = current.as_table()?.get(part)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_and_nested_forms_resolve_identically() {
        let dotted = Parameters::from_toml_str(
            r#"code.annotation.property = "http://example.org/code""#,
        )
        .expect("parse ok");
        let nested = Parameters::from_toml_str(
            r#"
[code.annotation]
property = "http://example.org/code"
"#,
        )
        .expect("parse ok");

        assert_eq!(
            dotted.code_annotation_property(),
            Some("http://example.org/code")
        );
        assert_eq!(
            nested.code_annotation_property(),
            Some("http://example.org/code")
        );
    }

    #[test]
    fn quoted_flat_key_resolves() {
        let params = Parameters::from_toml_str(
            r#""code.annotation.property" = "http://example.org/code""#,
        )
        .expect("parse ok");
        assert_eq!(
            params.code_annotation_property(),
            Some("http://example.org/code")
        );
    }

    #[test]
    fn non_string_leaf_is_ignored() {
        let params =
            Parameters::from_toml_str("code.annotation.property = 42").expect("parse ok");
        assert_eq!(params.code_annotation_property(), None);
    }

    #[test]
    fn unrecognized_keys_are_tolerated() {
        let params = Parameters::from_toml_str(
            r#"
some.other.option = "whatever"
code.annotation.property = "http://example.org/code"
"#,
        )
        .expect("parse ok");
        assert_eq!(
            params.code_annotation_property(),
            Some("http://example.org/code")
        );
        assert_eq!(params.get("some.other.option"), Some("whatever"));
        assert_eq!(params.get("missing.key"), None);
    }

    #[test]
    fn set_str_round_trip() {
        let mut params = Parameters::new();
        assert_eq!(params.code_annotation_property(), None);
        params.set_str(CODE_ANNOTATION_PROPERTY, "http://example.org/code");
        assert_eq!(
            params.code_annotation_property(),
            Some("http://example.org/code")
        );
    }

    #[test]
    fn load_from_file_reads_toml() {
        let dir = tempfile::tempdir().expect("tempdir ok");
        let path = dir.path().join("parameters.toml");
        std::fs::write(
            &path,
            "code.annotation.property = \"http://example.org/code\"\n",
        )
        .expect("write ok");

        let params = Parameters::load_from_file(&path).expect("load ok");
        assert_eq!(
            params.code_annotation_property(),
            Some("http://example.org/code")
        );
    }
}
