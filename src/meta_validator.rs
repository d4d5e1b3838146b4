//! Component I: the Document Meta-Validator.
//!
//! Checks that a document is a structurally well-formed OpenAPI
//! 3.0.x/3.1.x document *before* a [`crate::validator::OpenApiPayloadValidator`]
//! is built from it. This crate carries no vendored OpenAPI JSON
//! meta-schema text (the teacher's `openapi_v30x.rs`/`openapi_v31x.rs`
//! are typed Serde document models, not meta-schemas), so the check is
//! scoped to structural validity: does the document deserialize into
//! the version-appropriate typed model at all. A document that is
//! missing `paths`, has a `parameters` array where an object is
//! required, etc. fails here with the serde error preserved as the
//! violation's reason, rather than surfacing later as a confusing
//! panic or a wrong-shaped traversal error.

use crate::error::SchemaValidationError;
use crate::openapi_v30x::OpenApiDocument as V30Document;
use crate::openapi_v31x::OpenApiDocument as V31Document;
use crate::types::version::OpenApiVersion;
use serde_json::Value;

/// Attempts to deserialize `document` into the typed model matching
/// `version`, collecting every structural problem found. `Ok(())` means
/// the document is well-formed enough to build a validator from.
pub fn validate_document(
    document: &Value,
    version: OpenApiVersion,
) -> Result<(), Vec<SchemaValidationError>> {
    let result = match version {
        OpenApiVersion::V30x => serde_json::from_value::<V30Document>(document.clone()).err(),
        OpenApiVersion::V31x => serde_json::from_value::<V31Document>(document.clone()).err(),
    };
    match result {
        None => Ok(()),
        Some(e) => Err(vec![SchemaValidationError {
            location: format!("line {}, column {}", e.line(), e.column()),
            reason: e.to_string(),
        }]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_document_passes() {
        let doc = json!({
            "openapi": "3.0.0",
            "info": {"title": "t", "version": "1.0.0"},
            "paths": {}
        });
        assert!(validate_document(&doc, OpenApiVersion::V30x).is_ok());
    }

    #[test]
    fn missing_required_field_fails() {
        let doc = json!({"openapi": "3.0.0"});
        let errors = validate_document(&doc, OpenApiVersion::V30x).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
