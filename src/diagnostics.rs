//! Component F: the Diagnostic Builder.
//!
//! Owns every user-facing string this crate produces. Keeping the
//! wording in one module is what lets the concrete scenario table in
//! spec §8 be reproduced verbatim without each validator module having
//! to independently remember the exact phrasing.

use crate::error::{SchemaValidationError, ValidationError, ValidationSubType, ValidationType};

/// Where a parameter lives, for message wording ("Query parameter",
/// "Header parameter", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Header,
    Cookie,
}

impl Location {
    fn noun(self) -> &'static str {
        match self {
            Location::Path => "Path",
            Location::Query => "Query",
            Location::Header => "Header",
            Location::Cookie => "Cookie",
        }
    }

    pub(crate) fn validation_type(self) -> ValidationType {
        match self {
            Location::Path => ValidationType::Path,
            Location::Query => ValidationType::Query,
            Location::Header => ValidationType::Header,
            Location::Cookie => ValidationType::Cookie,
        }
    }
}

pub(crate) fn missing(
    loc: Location,
    name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: loc.validation_type(),
        validation_sub_type: ValidationSubType::Missing,
        message: format!("{} parameter '{name}' is missing", loc.noun()),
        reason: format!("the '{name}' parameter is required but was not present"),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("include the '{name}' parameter in the request"),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn missing_body(context: &str, line: usize, col: usize) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::RequestBody,
        validation_sub_type: ValidationSubType::Missing,
        message: "Request body is missing".to_string(),
        reason: "the operation requires a body but none was present".to_string(),
        spec_line: line,
        spec_col: col,
        how_to_fix: "include a request body matching the declared content type".to_string(),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn missing_body_field(field: &str, context: &str) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::RequestBody,
        validation_sub_type: ValidationSubType::Missing,
        message: format!("Request body is missing required field '{field}'"),
        reason: format!("'{field}' is declared as required but was not present in the body"),
        spec_line: 1,
        spec_col: 1,
        how_to_fix: format!("include '{field}' in the request body"),
        schema_error: None,
        context: context.to_string(),
    }
}

/// Scalar parameter coercion failed (spec §4.B rule 5 / §8 scenario 3).
pub(crate) fn wrong_type(
    loc: Location,
    name: &str,
    type_name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: loc.validation_type(),
        validation_sub_type: ValidationSubType::WrongType,
        message: format!("{} parameter '{name}' is not a valid {type_name}", loc.noun()),
        reason: format!("could not convert the value of '{name}' into a {type_name}"),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("provide a valid {type_name} value for '{name}'"),
        schema_error: None,
        context: context.to_string(),
    }
}

/// Same as [`wrong_type`] but for one element of an array parameter
/// (spec §8 scenario 5 — "Query array parameter ... is not a valid ...").
pub(crate) fn array_element_wrong_type(
    loc: Location,
    name: &str,
    type_name: &str,
    index: usize,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: loc.validation_type(),
        validation_sub_type: ValidationSubType::WrongType,
        message: format!(
            "{} array parameter '{name}' is not a valid {type_name}",
            loc.noun()
        ),
        reason: format!(
            "element {index} of '{name}' could not be converted into a {type_name}"
        ),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("provide a valid {type_name} value at index {index} of '{name}'"),
        schema_error: None,
        context: context.to_string(),
    }
}

/// Exploded array/object received with an internal delimiter in a
/// single occurrence (spec §8 scenario 6).
pub(crate) fn bad_explode(
    loc: Location,
    name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: loc.validation_type(),
        validation_sub_type: ValidationSubType::BadExplode,
        message: format!("{} parameter '{name}' is exploded incorrectly", loc.noun()),
        reason: format!(
            "'{name}' is declared with explode=true but was received as a single, delimited value"
        ),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("repeat '{name}={{value}}' once per element instead of delimiting them"),
        schema_error: None,
        context: context.to_string(),
    }
}

/// Non-exploded array/object received as repeated keys, or a style
/// that requires a delimiter other than the one actually used (spec §8
/// scenario 8).
pub(crate) fn bad_delimiter(
    loc: Location,
    name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: loc.validation_type(),
        validation_sub_type: ValidationSubType::BadDelimiter,
        message: format!("{} parameter '{name}' delimited incorrectly", loc.noun()),
        reason: format!("'{name}' was not delimited the way its declared style requires"),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("delimit the values of '{name}' according to its declared style"),
        schema_error: None,
        context: context.to_string(),
    }
}

/// A bare, repeated `name=value` was seen for a `deepObject` parameter
/// instead of bracketed `name[prop]=value` (spec §8 scenario 10).
pub(crate) fn deep_object_flat(
    name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::Query,
        validation_sub_type: ValidationSubType::DeepObjectFlat,
        message: format!("Query parameter '{name}' uses deepObject style incorrectly"),
        reason: format!(
            "'{name}' is declared with style=deepObject but was supplied as repeated, unbracketed values"
        ),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("use '{name}[property]=value' for each property instead"),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn deep_object_multi(
    name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::Query,
        validation_sub_type: ValidationSubType::DeepObjectMulti,
        message: format!("Query parameter '{name}' uses deepObject style incorrectly"),
        reason: format!(
            "'{name}' is declared with style=deepObject, which does not support multiple values for the same key"
        ),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("use '{name}[property]=value' once per property instead"),
        schema_error: None,
        context: context.to_string(),
    }
}

/// A raw occurrence contained an un-encoded RFC 3986 reserved character
/// while `allowReserved` is false (spec §8 scenario 11).
pub(crate) fn reserved_not_encoded(
    loc: Location,
    name: &str,
    raw: &str,
    encoded: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: loc.validation_type(),
        validation_sub_type: ValidationSubType::ReservedNotEncoded,
        message: format!("{} parameter '{name}' contains reserved characters", loc.noun()),
        reason: format!("'{raw}' contains RFC 3986 reserved characters that were not percent-encoded"),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!(
            "parameter values need to URL Encoded, replace '{raw}' with '{encoded}'"
        ),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn path_not_found(line: usize, col: usize) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::Path,
        validation_sub_type: ValidationSubType::NotFound,
        message: "No matching path was found for the request".to_string(),
        reason: "the request path does not match any path template declared in the document".to_string(),
        spec_line: line,
        spec_col: col,
        how_to_fix: "check the request URL against the documented paths".to_string(),
        schema_error: None,
        context: String::new(),
    }
}

pub(crate) fn method_not_allowed(
    method: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::Path,
        validation_sub_type: ValidationSubType::MethodNotAllowed,
        message: format!("Method '{method}' is not allowed for this path"),
        reason: format!("the matched path does not declare an operation for '{method}'"),
        spec_line: line,
        spec_col: col,
        how_to_fix: "use one of the methods declared for this path".to_string(),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn content_type_not_found(
    validation_type: ValidationType,
    method: &str,
    content_type: Option<&str>,
    declared: &[String],
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    let ct = content_type.unwrap_or("<none>");
    let noun = if validation_type == ValidationType::ResponseBody {
        "response"
    } else {
        "request"
    };
    ValidationError {
        validation_type,
        validation_sub_type: ValidationSubType::ContentType,
        message: format!("{method} operation {noun} content type '{ct}' does not exist"),
        reason: format!(
            "the content type '{ct}' of the {method} {noun} has not been defined, it's an unknown type"
        ),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!(
            "use one of the {} declared content type(s): {}",
            declared.len(),
            declared.join(", ")
        ),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn response_code_not_found(
    method: &str,
    code: u16,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type: ValidationType::ResponseBody,
        validation_sub_type: ValidationSubType::CodeNotFound,
        message: format!("{method} operation does not declare a response for status {code}"),
        reason: format!("status code {code} is not among the declared responses for this operation"),
        spec_line: line,
        spec_col: col,
        how_to_fix: "declare a response for this status code, or use one already declared".to_string(),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn body_parse_failed(
    validation_type: ValidationType,
    content_type: &str,
    detail: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    let noun = if validation_type == ValidationType::ResponseBody {
        "response"
    } else {
        "request"
    };
    ValidationError {
        validation_type,
        validation_sub_type: ValidationSubType::Parse,
        message: format!("Could not parse {noun} body as '{content_type}'"),
        reason: detail.to_string(),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("send a body that is valid '{content_type}'"),
        schema_error: None,
        context: context.to_string(),
    }
}

pub(crate) fn cancelled(validation_type: ValidationType, context: &str) -> ValidationError {
    ValidationError {
        validation_type,
        validation_sub_type: ValidationSubType::Cancelled,
        message: "Validation was cancelled".to_string(),
        reason: "a cancellation signal was observed before validation completed".to_string(),
        spec_line: 1,
        spec_col: 1,
        how_to_fix: "retry the request".to_string(),
        schema_error: None,
        context: context.to_string(),
    }
}

/// Wraps a schema-collaborator violation inside an outer
/// [`ValidationError`], preserving its JSON-Pointer location and reason
/// verbatim (spec §4.C). `index`/`property`, when present, are folded
/// into the message per spec §4.D rule 3 (one error per offending
/// array element or object property).
pub(crate) fn schema_violation(
    validation_type: ValidationType,
    name: &str,
    schema_error: SchemaValidationError,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    ValidationError {
        validation_type,
        validation_sub_type: ValidationSubType::WrongType,
        message: format!("'{name}' failed schema validation"),
        reason: schema_error.reason.clone(),
        spec_line: line,
        spec_col: col,
        how_to_fix: format!("fix '{name}' at {} so it matches its declared schema", schema_error.location),
        schema_error: Some(schema_error),
        context: context.to_string(),
    }
}
