//! Component D: the Parameter Validator.
//!
//! Generalizes the teacher's `RequestParameterValidator` (which only
//! ever validated flat, single-occurrence string values against one
//! location at a time) to all four parameter locations, driving the
//! decode matrix in [`crate::decoder`] and accumulating every failure
//! instead of stopping at the first.

use crate::decoder::{self, DecodeIssue, RawOccurrences};
use crate::diagnostics::{self, Location};
use crate::error::ValidationError;
use crate::schema_adapter::SchemaAdapter;
use crate::source_map::SourceMap;
use crate::traverser::OpenApiTraverser;
use crate::types::style::Style;
use crate::types::{Operation, ParameterLocation, SchemaKind};
use crate::{
    ALLOW_RESERVED_FIELD, EXPLODE_FIELD, IN_FIELD, NAME_FIELD, PARAMETERS_FIELD, REQUIRED_FIELD,
    SCHEMA_FIELD, STYLE_FIELD,
};

impl Location {
    fn from_parameter_location(loc: ParameterLocation) -> Location {
        match loc {
            ParameterLocation::Path => Location::Path,
            ParameterLocation::Query => Location::Query,
            ParameterLocation::Header => Location::Header,
            ParameterLocation::Cookie => Location::Cookie,
        }
    }
}

/// Validates every declared parameter for `location` against `operation`,
/// returning every violation found (presence, decode, and schema).
pub(crate) fn validate_parameters(
    traverser: &OpenApiTraverser,
    schema_adapter: &SchemaAdapter,
    source_map: &SourceMap,
    operation: &Operation,
    context: &str,
    location: ParameterLocation,
    occurrences_for: impl Fn(&str) -> RawOccurrences,
) -> Vec<ValidationError> {
    let op_def = operation.data();
    let diag_loc = Location::from_parameter_location(location);
    let mut errors = Vec::new();

    let Ok(Some(param_defs)) = traverser.get_optional(op_def, PARAMETERS_FIELD) else {
        return errors;
    };
    let Ok(param_defs) = OpenApiTraverser::require_array(param_defs.value()) else {
        return errors;
    };

    for param_def in param_defs {
        let Ok(resolved) = traverser.resolve_possible_ref(param_def) else {
            continue;
        };
        let param_def = resolved.value();
        let Ok(loc_str) = traverser.get_required(param_def, IN_FIELD) else {
            continue;
        };
        let Ok(loc_str) = OpenApiTraverser::require_str(loc_str.value()) else {
            continue;
        };
        if loc_str.to_lowercase() != location.to_string() {
            continue;
        }

        let Ok(name_result) = traverser.get_required(param_def, NAME_FIELD) else {
            continue;
        };
        let Ok(name) = OpenApiTraverser::require_str(name_result.value()) else {
            continue;
        };

        let is_required = traverser
            .get_optional(param_def, REQUIRED_FIELD)
            .ok()
            .flatten()
            .and_then(|v| OpenApiTraverser::require_bool(v.value()).ok())
            .unwrap_or(false);

        let occurrences = occurrences_for(name);
        let pointer = format!("/{}", operation.path().format_path());
        let (line, col) = source_map.lookup(&pointer);

        if occurrences.flat.is_empty() && occurrences.bracketed.is_empty() {
            if is_required {
                errors.push(diagnostics::missing(diag_loc, name, context, line, col));
            }
            continue;
        }

        let Ok(schema_result) = traverser.get_required(param_def, SCHEMA_FIELD) else {
            continue;
        };
        let Ok(schema_result) = traverser.resolve_possible_ref(schema_result.value()) else {
            continue;
        };
        let schema = schema_result.value();

        let style = traverser
            .get_optional(param_def, STYLE_FIELD)
            .ok()
            .flatten()
            .and_then(|v| OpenApiTraverser::require_str(v.value()).ok().map(String::from));
        let style = Style::parse(style.as_deref());
        let explode = traverser
            .get_optional(param_def, EXPLODE_FIELD)
            .ok()
            .flatten()
            .and_then(|v| OpenApiTraverser::require_bool(v.value()).ok())
            .unwrap_or_else(|| style.default_explode());
        let allow_reserved = traverser
            .get_optional(param_def, ALLOW_RESERVED_FIELD)
            .ok()
            .flatten()
            .and_then(|v| OpenApiTraverser::require_bool(v.value()).ok())
            .unwrap_or(false);

        let kind = SchemaKind::from_schema(schema);
        let outcome = decoder::decode_parameter(style, explode, allow_reserved, &kind, &occurrences);

        if !outcome.issues.is_empty() {
            let type_name = match &kind {
                SchemaKind::Scalar(t) => t.to_string(),
                SchemaKind::Array(t) => t.to_string(),
                SchemaKind::Object => "object".to_string(),
            };
            for issue in &outcome.issues {
                errors.push(issue_to_error(diag_loc, name, issue, &type_name, context, line, col));
            }
            continue;
        }

        let Some(decoded) = outcome.value else { continue };
        let instance = decoded.to_json();
        let schema_pointer = format!("{}/{}/{}", operation.path().format_path(), PARAMETERS_FIELD, name);
        if let Ok(violations) = schema_adapter.validate_all(&schema_pointer, schema, &instance) {
            for v in violations {
                errors.push(diagnostics::schema_violation(
                    diag_loc.validation_type(),
                    name,
                    v,
                    context,
                    line,
                    col,
                ));
            }
        }
    }

    errors
}

fn issue_to_error(
    loc: Location,
    name: &str,
    issue: &DecodeIssue,
    type_name: &str,
    context: &str,
    line: usize,
    col: usize,
) -> ValidationError {
    match issue {
        DecodeIssue::BadExplode => diagnostics::bad_explode(loc, name, context, line, col),
        DecodeIssue::BadDelimiter => diagnostics::bad_delimiter(loc, name, context, line, col),
        DecodeIssue::DeepObjectFlat => diagnostics::deep_object_flat(name, context, line, col),
        DecodeIssue::DeepObjectMulti => diagnostics::deep_object_multi(name, context, line, col),
        DecodeIssue::ReservedNotEncoded { raw, encoded } => {
            diagnostics::reserved_not_encoded(loc, name, raw, encoded, context, line, col)
        }
        DecodeIssue::WrongType { index: None } => {
            diagnostics::wrong_type(loc, name, type_name, context, line, col)
        }
        DecodeIssue::WrongType { index: Some(i) } => {
            diagnostics::array_element_wrong_type(loc, name, type_name, *i, context, line, col)
        }
    }
}

/// Splits a raw `key=value&key=value` query string into per-name
/// [`RawOccurrences`], recognizing `name[prop]=value` as a `deepObject`
/// bracketed occurrence. Values stay percent-encoded; the decoder does
/// the percent-decoding itself.
pub(crate) fn occurrences_from_query(query: &str, name: &str) -> RawOccurrences {
    let mut out = RawOccurrences::default();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let Some(key) = parts.next() else { continue };
        let value = parts.next().unwrap_or("");
        if let Some(bracket_start) = key.find('[') {
            if key.ends_with(']') && &key[..bracket_start] == name {
                let prop = &key[bracket_start + 1..key.len() - 1];
                out.bracketed.push((prop.to_string(), value.to_string()));
            }
        } else if key == name {
            out.flat.push(value.to_string());
        }
    }
    out
}

/// Cookie headers are `;`-separated `name=value` pairs with no
/// repetition or bracket syntax.
pub(crate) fn occurrences_from_cookie_header(cookie_header: &str, name: &str) -> RawOccurrences {
    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        let mut parts = pair.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if key == name {
                return RawOccurrences::single(value);
            }
        }
    }
    RawOccurrences::default()
}

/// Extracts the raw path-parameter value for `name` by zipping the
/// spec path `template` (e.g. `/pets/{id}`) against the concrete
/// `request_path` segment-by-segment.
pub(crate) fn occurrences_from_path(template: &str, request_path: &str, name: &str) -> RawOccurrences {
    let template_segments: Vec<&str> = template.split('/').collect();
    let request_segments: Vec<&str> = request_path.split('/').collect();
    if template_segments.len() != request_segments.len() {
        return RawOccurrences::default();
    }
    for (t, r) in template_segments.iter().zip(request_segments.iter()) {
        if t.starts_with('{') && t.ends_with('}') && &t[1..t.len() - 1] == name {
            return RawOccurrences::single(*r);
        }
    }
    RawOccurrences::default()
}

pub(crate) fn occurrences_single(value: Option<&str>) -> RawOccurrences {
    match value {
        Some(v) => RawOccurrences::single(v),
        None => RawOccurrences::default(),
    }
}
