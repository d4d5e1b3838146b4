//! Facade construction.
//!
//! Extends the teacher's `OpenApiPayloadValidatorBuilder` (document-
//! only, no source-location support) with an optional source-text path:
//! when the caller supplies the document's original text alongside the
//! parsed `Value`, the resulting validator's errors carry real
//! `spec_line`/`spec_col` positions via [`crate::source_map::SourceMap`]
//! instead of the `(1, 1)` fallback.

use crate::error::BuildError;
use crate::source_map::SourceMap;
use crate::validator::OpenApiPayloadValidator;
use serde_json::Value;

enum SpecificationLoader {
    None,
    Value(Value),
    File(String),
}

/// Builds an [`OpenApiPayloadValidator`]. `load_from_file`/`document`
/// supply the specification; `source_text` is optional and, when
/// given, backs source-location reporting.
pub struct OpenApiPayloadValidatorBuilder {
    specification_loader: SpecificationLoader,
    source_text: Option<String>,
}

impl Default for OpenApiPayloadValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenApiPayloadValidatorBuilder {
    pub fn new() -> Self {
        Self {
            specification_loader: SpecificationLoader::None,
            source_text: None,
        }
    }

    pub fn document(mut self, document: Value) -> Self {
        self.specification_loader = SpecificationLoader::Value(document);
        self
    }

    pub fn load_from_file(mut self, path: impl Into<String>) -> Self {
        self.specification_loader = SpecificationLoader::File(path.into());
        self
    }

    /// Supplies the document's original source text (JSON), enabling
    /// real `spec_line`/`spec_col` positions in reported errors. When
    /// `load_from_file` is used, this is populated automatically from
    /// the same file unless overridden.
    pub fn source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn build(self) -> Result<OpenApiPayloadValidator, BuildError> {
        let (spec, source_text) = match self.specification_loader {
            SpecificationLoader::None => {
                return Err(BuildError::SchemaBuild(
                    "no specification provided to the builder".to_string(),
                ));
            }
            SpecificationLoader::Value(value) => (value, self.source_text),
            SpecificationLoader::File(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| BuildError::SchemaBuild(e.to_string()))?;
                let value: Value = serde_json::from_str(&content)
                    .map_err(|e| BuildError::SchemaBuild(e.to_string()))?;
                let source_text = self.source_text.or(Some(content));
                (value, source_text)
            }
        };

        let source_map = match source_text {
            Some(text) => SourceMap::from_json_source(&text),
            None => SourceMap::empty(),
        };

        OpenApiPayloadValidator::build(spec, source_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_from_an_in_memory_document() {
        let spec = json!({
            "openapi": "3.1.0",
            "info": {"title": "fishy", "version": "1.0.0"},
            "paths": {}
        });
        let validator = OpenApiPayloadValidatorBuilder::new().document(spec).build();
        assert!(validator.is_ok());
    }

    #[test]
    fn build_without_a_specification_fails() {
        let result = OpenApiPayloadValidatorBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn source_text_enables_real_positions() {
        let text = r#"{"openapi":"3.1.0","info":{"title":"t","version":"1.0.0"},"paths":{}}"#;
        let spec: Value = serde_json::from_str(text).unwrap();
        let validator = OpenApiPayloadValidatorBuilder::new()
            .document(spec)
            .source_text(text)
            .build()
            .unwrap();
        let (_, errors) = validator.find_path("/missing", "get");
        assert_eq!(errors[0].spec_line, 1);
    }
}
