//! Reproduces the concrete scenario table from the specification's
//! testable-properties section verbatim: one document
//! (`GET /a/fishy/on/a/dishy`, a single query parameter `fishy`) whose
//! schema/style/explode vary per scenario, each checked against the
//! expected validity, error count, and message text.

use oasert::OpenApiPayloadValidator;
use serde_json::{json, Value};

const PATH: &str = "/a/fishy/on/a/dishy";

fn document(parameter: Value) -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {"title": "fishy", "version": "1.0.0"},
        "paths": {
            PATH: {
                "get": {
                    "parameters": [parameter],
                    "responses": {"200": {"description": "ok"}}
                }
            }
        }
    })
}

fn query_errors(parameter: Value, query: &str) -> (bool, Vec<oasert::ValidationError>) {
    let validator = OpenApiPayloadValidator::new(document(parameter)).unwrap();
    let (operation, path_errors) = validator.find_path(PATH, "get");
    assert!(path_errors.is_empty(), "{path_errors:?}");
    let operation = operation.expect("path should resolve");
    validator.validate_query_params(&operation, "GET /a/fishy/on/a/dishy", query)
}

/// 1: required string, missing -> 1 error, exact message.
#[test]
fn scenario_1_missing_required_string() {
    let param = json!({"name": "fishy", "in": "query", "required": true, "schema": {"type": "string"}});
    let (ok, errors) = query_errors(param, "");
    assert!(!ok);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Query parameter 'fishy' is missing");
}

/// 2: required string, present -> valid.
#[test]
fn scenario_2_present_required_string_is_valid() {
    let param = json!({"name": "fishy", "in": "query", "required": true, "schema": {"type": "string"}});
    let (ok, errors) = query_errors(param, "fishy=cod");
    assert!(ok, "{errors:?}");
}

/// 3: number-typed, non-numeric value -> wrong-type message.
#[test]
fn scenario_3_wrong_scalar_type() {
    let param = json!({"name": "fishy", "in": "query", "schema": {"type": "number"}});
    let (ok, errors) = query_errors(param, "fishy=cod");
    assert!(!ok);
    assert_eq!(errors[0].message, "Query parameter 'fishy' is not a valid number");
}

/// 4: boolean-typed, valid boolean literal -> valid.
#[test]
fn scenario_4_boolean_literal_is_valid() {
    let param = json!({"name": "fishy", "in": "query", "schema": {"type": "boolean"}});
    let (ok, errors) = query_errors(param, "fishy=true");
    assert!(ok, "{errors:?}");
}

/// 5: array of number, default form/explode, two non-numeric
/// occurrences -> 2 errors, both the array wrong-type message.
#[test]
fn scenario_5_array_elements_wrong_type() {
    let param = json!({
        "name": "fishy", "in": "query",
        "schema": {"type": "array", "items": {"type": "number"}}
    });
    let (ok, errors) = query_errors(param, "fishy=cod&fishy=haddock");
    assert!(!ok);
    assert_eq!(errors.len(), 2);
    for error in &errors {
        assert_eq!(error.message, "Query array parameter 'fishy' is not a valid number");
    }
}

/// 6: array of string, explode=true, received as one delimited
/// occurrence with two tokens -> 2 badExplode errors.
#[test]
fn scenario_6_exploded_array_received_delimited() {
    let param = json!({
        "name": "fishy", "in": "query", "explode": true,
        "schema": {"type": "array", "items": {"type": "string"}}
    });
    let (ok, errors) = query_errors(param, "fishy=cod,haddock");
    assert!(!ok);
    assert_eq!(errors.len(), 2);
    for error in &errors {
        assert_eq!(error.validation_sub_type, oasert::error::ValidationSubType::BadExplode);
    }
}

/// 7: array of string, explode=false, comma-delimited -> valid.
#[test]
fn scenario_7_non_exploded_array_is_valid() {
    let param = json!({
        "name": "fishy", "in": "query", "explode": false,
        "schema": {"type": "array", "items": {"type": "string"}}
    });
    let (ok, errors) = query_errors(param, "fishy=cod,haddock,mackrel");
    assert!(ok, "{errors:?}");
}

/// 8: array of string, style=spaceDelimited, received comma-delimited
/// -> 1 badDelimiter error, exact message.
#[test]
fn scenario_8_wrong_delimiter_style() {
    let param = json!({
        "name": "fishy", "in": "query", "style": "spaceDelimited",
        "schema": {"type": "array", "items": {"type": "string"}}
    });
    let (ok, errors) = query_errors(param, "fishy=cod,haddock,mackrel");
    assert!(!ok);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Query parameter 'fishy' delimited incorrectly");
}

/// 9: deepObject object with a required boolean property, supplied a
/// number instead -> 1 schema error whose reason names the mismatch.
#[test]
fn scenario_9_deep_object_schema_violation() {
    let param = json!({
        "name": "fishy", "in": "query", "style": "deepObject",
        "schema": {
            "type": "object",
            "required": ["ocean", "salt"],
            "properties": {"ocean": {"type": "string"}, "salt": {"type": "boolean"}}
        }
    });
    let (ok, errors) = query_errors(param, "fishy[ocean]=atlantic&fishy[salt]=12");
    assert!(!ok);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].reason.contains("boolean"));
}

/// 10: same schema as 9, but supplied as repeated bare occurrences
/// instead of bracketed properties -> deepObject/multi diagnostic.
#[test]
fn scenario_10_deep_object_received_as_repeated_bare_values() {
    let param = json!({
        "name": "fishy", "in": "query", "style": "deepObject",
        "schema": {
            "type": "object",
            "required": ["ocean", "salt"],
            "properties": {"ocean": {"type": "string"}, "salt": {"type": "boolean"}}
        }
    });
    let (ok, errors) = query_errors(param, "fishy=atlantic&fishy=12");
    assert!(!ok);
    assert!(errors.iter().any(|e| e.reason.contains("deepObject") && e.reason.contains("multiple values")));
}

/// 11: exploded array, an occurrence containing an un-encoded reserved
/// character -> reservedNotEncoded, HowToFix names the percent-encoded form.
#[test]
fn scenario_11_reserved_characters_not_encoded() {
    let param = json!({
        "name": "fishy", "in": "query", "explode": true,
        "schema": {"type": "array", "items": {"type": "string"}}
    });
    let (ok, errors) = query_errors(param, "fishy=$$oh");
    assert!(!ok);
    assert!(errors.iter().any(|e| e.how_to_fix.contains("%24%24oh")));
}

/// 12: unknown path -> find_path reports no operation (pathItem=nil).
#[test]
fn scenario_12_unknown_path_yields_no_operation() {
    let param = json!({"name": "fishy", "in": "query", "schema": {"type": "string"}});
    let validator = OpenApiPayloadValidator::new(document(param)).unwrap();
    let (operation, errors) = validator.find_path("/Not/Found/dishy", "get");
    assert!(operation.is_none());
    assert_eq!(errors.len(), 1);
}

/// Invariant 2: when `find_path` finds nothing, every other validator
/// call the caller might still attempt would have nothing to validate
/// against -- there is no `Operation` to pass them. Invariant 3: no
/// diagnostic carries an empty message/reason or a zero spec line.
#[test]
fn invariant_no_diagnostic_is_empty_or_unlocated() {
    let param = json!({"name": "fishy", "in": "query", "required": true, "schema": {"type": "string"}});
    let (_, errors) = query_errors(param, "");
    for error in &errors {
        assert!(!error.message.is_empty());
        assert!(!error.reason.is_empty());
        assert!(error.spec_line >= 1);
    }
}

/// Invariant 1: repeated calls with equal inputs produce equal outputs.
#[test]
fn invariant_validation_is_deterministic() {
    let param = json!({"name": "fishy", "in": "query", "schema": {"type": "number"}});
    let validator = OpenApiPayloadValidator::new(document(param)).unwrap();
    let (operation, _) = validator.find_path(PATH, "get");
    let operation = operation.unwrap();
    let first = validator.validate_query_params(&operation, "GET /a/fishy/on/a/dishy", "fishy=cod");
    let second = validator.validate_query_params(&operation, "GET /a/fishy/on/a/dishy", "fishy=cod");
    assert_eq!(first, second);
}
