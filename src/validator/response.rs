//! Component H: the Response Validator.
//!
//! New relative to the teacher, which only ever validated requests.
//! Mirrors `request_body.rs`'s content-negotiation/schema-validate
//! shape, but resolves against a status code first: an exact code
//! match wins, then an OpenAPI range wildcard (`2XX`, `4XX`, ...), then
//! the `default` response key, matching the resolution order the
//! OpenAPI specification itself defines for the `responses` object.

use crate::diagnostics::{self};
use crate::error::{ValidationError, ValidationType};
use crate::schema_adapter::SchemaAdapter;
use crate::source_map::SourceMap;
use crate::traverser::OpenApiTraverser;
use crate::types::Operation;
use crate::{CONTENT_FIELD, DEFAULT_RESPONSE_FIELD, RESPONSES_FIELD, SCHEMA_FIELD};
use serde_json::Value;

/// Resolves the `responses` entry matching `status`, preferring an
/// exact code, then a range wildcard, then `default`.
fn resolve_response_def<'a>(
    traverser: &OpenApiTraverser,
    responses: &'a Value,
    status: u16,
) -> Option<crate::traverser::SearchResult<'a>> {
    let exact = status.to_string();
    if let Ok(Some(found)) = traverser.get_optional(responses, &exact) {
        return Some(found);
    }
    let range = format!("{}XX", status / 100);
    if let Ok(Some(found)) = traverser.get_optional(responses, &range) {
        return Some(found);
    }
    traverser.get_optional(responses, DEFAULT_RESPONSE_FIELD).ok().flatten()
}

/// Validates a response body against the operation's declared
/// `responses` entry for `status`. `raw_body` is the not-yet-parsed
/// body text; `content_type` is the response's declared media type.
pub(crate) fn validate_response_body(
    traverser: &OpenApiTraverser,
    schema_adapter: &SchemaAdapter,
    source_map: &SourceMap,
    operation: &Operation,
    context: &str,
    status: u16,
    content_type: Option<&str>,
    raw_body: Option<&str>,
    cancel: Option<&dyn Fn() -> bool>,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let op_def = operation.data();
    let method = context.split_whitespace().next().unwrap_or("");
    let pointer = format!("/{}", operation.path().format_path());
    let (line, col) = source_map.lookup(&pointer);

    let Ok(responses) = traverser.get_required(op_def, RESPONSES_FIELD) else {
        return errors;
    };
    let Ok(response_def) = traverser.resolve_possible_ref(
        match resolve_response_def(traverser, responses.value(), status) {
            Some(found) => found.value(),
            None => {
                errors.push(diagnostics::response_code_not_found(method, status, context, line, col));
                return errors;
            }
        },
    ) else {
        return errors;
    };
    let response_def = response_def.value();

    if cancel.is_some_and(|c| c()) {
        errors.push(diagnostics::cancelled(ValidationType::ResponseBody, context));
        return errors;
    }

    let Ok(Some(content_def)) = traverser.get_optional(response_def, CONTENT_FIELD) else {
        return errors;
    };
    let declared_types: Vec<String> = OpenApiTraverser::require_object(content_def.value())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let Some(ctype) = content_type else {
        if raw_body.is_some() {
            errors.push(diagnostics::content_type_not_found(
                ValidationType::ResponseBody,
                method,
                None,
                &declared_types,
                context,
                line,
                col,
            ));
        }
        return errors;
    };

    let base_type = ctype.split(';').next().unwrap_or(ctype).trim();
    let Ok(media_def) = traverser.get_required(content_def.value(), base_type) else {
        errors.push(diagnostics::content_type_not_found(
            ValidationType::ResponseBody,
            method,
            Some(ctype),
            &declared_types,
            context,
            line,
            col,
        ));
        return errors;
    };
    let Ok(media_schema) = traverser.get_required(media_def.value(), SCHEMA_FIELD) else {
        return errors;
    };
    let Ok(media_schema) = traverser.resolve_possible_ref(media_schema.value()) else {
        return errors;
    };
    let media_schema = media_schema.value();

    let Some(raw) = raw_body else {
        return errors;
    };
    let body = match super::request_body::parse_body(ctype, raw) {
        Ok(parsed) => parsed,
        Err(reason) => {
            errors.push(diagnostics::body_parse_failed(
                ValidationType::ResponseBody,
                ctype,
                &reason,
                context,
                line,
                col,
            ));
            return errors;
        }
    };

    if cancel.is_some_and(|c| c()) {
        errors.push(diagnostics::cancelled(ValidationType::ResponseBody, context));
        return errors;
    }

    let schema_pointer = format!(
        "{}/{}/{}/{}/schema",
        operation.path().format_path(),
        RESPONSES_FIELD,
        status,
        base_type
    );
    if let Ok(violations) = schema_adapter.validate_all(&schema_pointer, media_schema, &body) {
        for v in violations {
            errors.push(diagnostics::schema_violation(
                ValidationType::ResponseBody,
                "body",
                v,
                context,
                line,
                col,
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_code_wins_over_range_and_default() {
        let responses = json!({
            "200": {"description": "ok"},
            "2XX": {"description": "range"},
            "default": {"description": "default"},
        });
        let traverser = OpenApiTraverser::new(json!({})).unwrap();
        let resolved = resolve_response_def(&traverser, &responses, 200).unwrap();
        assert_eq!(
            resolved.value().get("description").and_then(Value::as_str),
            Some("ok")
        );
    }

    #[test]
    fn range_wildcard_used_when_no_exact_code() {
        let responses = json!({
            "2XX": {"description": "range"},
            "default": {"description": "default"},
        });
        let traverser = OpenApiTraverser::new(json!({})).unwrap();
        let resolved = resolve_response_def(&traverser, &responses, 204).unwrap();
        assert_eq!(
            resolved.value().get("description").and_then(Value::as_str),
            Some("range")
        );
    }

    #[test]
    fn default_used_as_last_resort() {
        let responses = json!({"default": {"description": "default"}});
        let traverser = OpenApiTraverser::new(json!({})).unwrap();
        let resolved = resolve_response_def(&traverser, &responses, 500).unwrap();
        assert_eq!(
            resolved.value().get("description").and_then(Value::as_str),
            Some("default")
        );
    }

    #[test]
    fn missing_response_yields_none() {
        let responses = json!({"200": {"description": "ok"}});
        let traverser = OpenApiTraverser::new(json!({})).unwrap();
        assert!(resolve_response_def(&traverser, &responses, 404).is_none());
    }
}
