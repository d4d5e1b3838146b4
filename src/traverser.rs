//! Component A: the Path Matcher, plus the `$ref`-resolution and
//! document-traversal helpers every other component builds on.

use crate::error::TraverserError;
use crate::types::json_path::JsonPath;
use crate::types::Operation;
use crate::{PATHS_FIELD, PATH_SEPARATOR, REF_FIELD};
use dashmap::{DashMap, Entry};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::sync::Arc;

type TraverseResult<'a> = Result<SearchResult<'a>, TraverserError>;

#[derive(Debug)]
pub enum SearchResult<'a> {
    /// A search yielding a cached `$ref` target.
    Arc(Arc<Value>),
    /// A search result yielding a sub-node (no reference string).
    Ref(&'a Value),
}

impl<'a> SearchResult<'a> {
    pub fn value(&'a self) -> &'a Value {
        match self {
            SearchResult::Arc(arc_val) => arc_val,
            SearchResult::Ref(val) => val,
        }
    }
}

/// How closely a concrete request path matches a spec path template.
/// Fewer templated segments wins; ties break lexicographically on the
/// template string, per spec §4.A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Specificity {
    templated_segments: usize,
}

pub struct OpenApiTraverser {
    specification: Value,
    resolved_references: DashMap<String, Arc<Value>>,
    resolved_operations: DashMap<(String, String), Arc<Operation>>,
}

impl OpenApiTraverser {
    pub fn new(specification: Value) -> Result<Self, TraverserError> {
        Ok(Self {
            specification,
            resolved_references: DashMap::new(),
            resolved_operations: DashMap::new(),
        })
    }

    pub fn specification(&self) -> &Value {
        &self.specification
    }

    fn is_parameter_segment(segment: &str) -> bool {
        segment.starts_with('{') && segment.ends_with('}')
    }

    fn path_has_parameter(path: &str) -> bool {
        path.contains('{') && path.contains('}')
    }

    /// Finds the operation matching `request_path`/`request_method`,
    /// resolving path-template ambiguity by specificity: among every
    /// spec path template whose segments match, the one with the fewest
    /// templated segments wins; ties break lexicographically.
    pub fn get_operation_from_path_and_method(
        &self,
        request_path: &str,
        request_method: &str,
    ) -> Result<Arc<Operation>, TraverserError> {
        let request_method = request_method.to_lowercase();

        let entry = self
            .resolved_operations
            .entry((request_path.to_string(), request_method.clone()));
        if let Entry::Occupied(e) = entry {
            return Ok(e.get().clone());
        }

        let spec_paths = Self::get_as_object(&self.specification, PATHS_FIELD)?;

        let mut best: Option<(&str, &Value, Specificity)> = None;
        for (spec_path, spec_path_methods) in spec_paths {
            let operations = Self::require_object(spec_path_methods)?;
            let Some(operation) = operations.get(request_method.as_str()) else {
                continue;
            };
            if !self.matches_spec_path(operation, request_path, spec_path) {
                continue;
            }
            let specificity = Specificity {
                templated_segments: spec_path
                    .split(PATH_SEPARATOR)
                    .filter(|s| Self::is_parameter_segment(s))
                    .count(),
            };
            let better = match &best {
                None => true,
                Some((current_path, _, current_specificity)) => {
                    specificity < *current_specificity
                        || (specificity == *current_specificity && spec_path.as_str() < *current_path)
                }
            };
            if better {
                best = Some((spec_path, operation, specificity));
            }
        }

        let Some((spec_path, operation, _)) = best else {
            return Err(TraverserError::FieldMissing(format!(
                "no path template matches '{request_path}'"
            )));
        };

        let mut json_path = JsonPath::new();
        json_path.add(PATHS_FIELD).add(spec_path).add(&request_method);
        let operation = Arc::new(Operation::new(operation.clone(), json_path));

        if !Self::path_has_parameter(spec_path) {
            self.resolved_operations
                .insert((request_path.to_string(), request_method), operation.clone());
        }

        Ok(operation)
    }

    /// Finds the spec path template matching `request_path` regardless
    /// of method, returning the methods declared for it. An empty
    /// result means no path template matches at all; a non-empty result
    /// not containing the request method means the path exists but the
    /// method doesn't -- this is what lets the Facade tell
    /// `path/notFound` apart from `path/methodNotAllowed`.
    pub(crate) fn methods_for_matching_path(
        &self,
        request_path: &str,
    ) -> Result<Vec<String>, TraverserError> {
        let spec_paths = Self::get_as_object(&self.specification, PATHS_FIELD)?;

        let mut best: Option<(&str, &Map<String, Value>, Specificity)> = None;
        for (spec_path, spec_path_methods) in spec_paths {
            let operations = Self::require_object(spec_path_methods)?;
            let Some((_, sample_operation)) = operations.iter().next() else {
                continue;
            };
            if !self.matches_spec_path(sample_operation, request_path, spec_path) {
                continue;
            }
            let specificity = Specificity {
                templated_segments: spec_path
                    .split(PATH_SEPARATOR)
                    .filter(|s| Self::is_parameter_segment(s))
                    .count(),
            };
            let better = match &best {
                None => true,
                Some((current_path, _, current_specificity)) => {
                    specificity < *current_specificity
                        || (specificity == *current_specificity && spec_path.as_str() < *current_path)
                }
            };
            if better {
                best = Some((spec_path, operations, specificity));
            }
        }

        Ok(best
            .map(|(_, ops, _)| ops.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Whether `spec_path` (a template that may contain `{param}`
    /// segments) matches the concrete `path_to_match`. Matching is
    /// purely structural per spec §4.A: a templated segment matches any
    /// non-empty segment and binds it, regardless of the parameter's
    /// declared schema. Type mismatches on a path parameter are a
    /// Parameter Validator concern (`wrongType`), not a routing concern
    /// -- coercing through the schema here would make that diagnostic
    /// unreachable.
    fn matches_spec_path(&self, _operation: &Value, path_to_match: &str, spec_path: &str) -> bool {
        if !Self::path_has_parameter(spec_path) {
            return spec_path == path_to_match;
        }

        let target_segments: Vec<&str> = path_to_match.split(PATH_SEPARATOR).collect();
        let spec_segments: Vec<&str> = spec_path.split(PATH_SEPARATOR).collect();
        if spec_segments.len() != target_segments.len() {
            return false;
        }

        spec_segments.iter().zip(target_segments.iter()).all(
            |(spec_segment, target_segment)| {
                if !Self::is_parameter_segment(spec_segment) {
                    return spec_segment == target_segment;
                }
                !target_segment.is_empty()
            },
        )
    }

    pub fn get_optional<'node>(
        &'node self,
        node: &'node Value,
        field: &str,
    ) -> Result<Option<SearchResult<'node>>, TraverserError>
    where
        Self: 'node,
    {
        match self.get_required(node, field) {
            Ok(found) => Ok(Some(found)),
            Err(TraverserError::FieldMissing(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get_required<'node>(
        &'node self,
        node: &'node Value,
        field: &str,
    ) -> Result<SearchResult<'node>, TraverserError>
    where
        Self: 'node,
    {
        let ref_result = self.resolve_possible_ref(node)?;
        match ref_result {
            SearchResult::Arc(val) => match val.get(field) {
                None => Err(TraverserError::FieldMissing(field.to_string())),
                Some(v) => Ok(SearchResult::Arc(Arc::new(v.clone()))),
            },
            SearchResult::Ref(val) => match val.get(field) {
                None => Err(TraverserError::FieldMissing(field.to_string())),
                Some(v) => Ok(SearchResult::Ref(v)),
            },
        }
    }

    pub(crate) fn resolve_possible_ref<'node>(&'node self, node: &'node Value) -> TraverseResult<'node> {
        if let Ok(ref_string) = Self::get_as_str(node, REF_FIELD) {
            let entry = self.resolved_references.entry(String::from(ref_string));
            return match entry {
                Entry::Occupied(entry) => Ok(SearchResult::Arc(entry.get().clone())),
                Entry::Vacant(entry) => {
                    let mut seen_references = HashSet::new();
                    let res = self.get_reference_path(ref_string, &mut seen_references)?;
                    let res = match res {
                        SearchResult::Arc(val) => val,
                        SearchResult::Ref(val) => Arc::new(val.clone()),
                    };
                    entry.insert(res.clone());
                    Ok(SearchResult::Arc(res))
                }
            };
        }
        Ok(SearchResult::Ref(node))
    }

    fn get_reference_path<'node, 'sub_node>(
        &'node self,
        ref_string: &'node str,
        seen_references: &mut HashSet<&'node str>,
    ) -> TraverseResult<'sub_node>
    where
        'node: 'sub_node,
    {
        if seen_references.contains(ref_string) {
            return Err(TraverserError::CircularReference(ref_string.to_string()));
        }
        seen_references.insert(ref_string);

        let path = ref_string
            .split(PATH_SEPARATOR)
            .filter(|node| !(*node).is_empty() && (*node != "#"))
            .collect::<Vec<&str>>()
            .join("/");
        let complete_path = format!("/{path}");

        match self.specification.pointer(&complete_path) {
            None => Err(TraverserError::InvalidRef(ref_string.to_string())),
            Some(v) => self.resolve_possible_ref(v),
        }
    }

    fn get_as_str<'node, 'sub_node>(
        node: &'node Value,
        field: &str,
    ) -> Result<&'sub_node str, TraverserError>
    where
        'node: 'sub_node,
    {
        match node.get(field) {
            None => Err(TraverserError::FieldMissing(field.to_string())),
            Some(found) => Self::require_str(found),
        }
    }

    fn get_as_object<'node, 'sub_node>(
        node: &'node Value,
        field: &str,
    ) -> Result<&'sub_node Map<String, Value>, TraverserError>
    where
        'node: 'sub_node,
    {
        match node.get(field) {
            None => Err(TraverserError::FieldMissing(field.to_string())),
            Some(val) => Self::require_object(val),
        }
    }

    fn get_as_array<'node, 'sub_node>(
        node: &'node Value,
        field: &str,
    ) -> Result<&'sub_node Vec<Value>, TraverserError>
    where
        'node: 'sub_node,
    {
        match node.get(field) {
            None => Err(TraverserError::FieldMissing(field.to_string())),
            Some(found) => Self::require_array(found),
        }
    }

    pub(crate) fn require_bool(node: &Value) -> Result<bool, TraverserError> {
        node.as_bool()
            .ok_or_else(|| TraverserError::NotABool(node.to_string()))
    }

    pub(crate) fn require_str<'node, 'sub_node>(
        node: &'node Value,
    ) -> Result<&'sub_node str, TraverserError>
    where
        'node: 'sub_node,
    {
        node.as_str()
            .ok_or_else(|| TraverserError::NotAString(node.to_string()))
    }

    pub(crate) fn require_object<'node, 'sub_node>(
        node: &'node Value,
    ) -> Result<&'sub_node Map<String, Value>, TraverserError>
    where
        'node: 'sub_node,
    {
        node.as_object()
            .ok_or_else(|| TraverserError::NotAnObject(node.to_string()))
    }

    pub(crate) fn require_array<'node, 'sub_node>(
        node: &'node Value,
    ) -> Result<&'sub_node Vec<Value>, TraverserError>
    where
        'node: 'sub_node,
    {
        node.as_array()
            .ok_or_else(|| TraverserError::NotAnArray(node.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_path_matches_exactly() {
        let traverser = OpenApiTraverser::new(json!({})).unwrap();
        let operation = json!({"parameters": []});
        assert!(traverser.matches_spec_path(&operation, "/api/users", "/api/users"));
        assert!(!traverser.matches_spec_path(&operation, "/api/products", "/api/users"));
    }

    #[test]
    fn templated_segment_matches_any_non_empty_segment() {
        let traverser = OpenApiTraverser::new(json!({})).unwrap();
        let operation = json!({
            "parameters": [
                {"name": "id", "in": "path", "schema": {"type": "integer"}}
            ]
        });
        assert!(traverser.matches_spec_path(&operation, "/api/users/12345", "/api/users/{id}"));
        // Structural match regardless of the declared schema -- a
        // type mismatch is the Parameter Validator's job, not routing's.
        assert!(traverser.matches_spec_path(&operation, "/api/users/abc", "/api/users/{id}"));
        assert!(!traverser.matches_spec_path(&operation, "/api/users/", "/api/users/{id}"));
    }

    #[test]
    fn more_specific_path_wins_over_templated() {
        let spec = json!({
            "paths": {
                "/pets/{id}": {"get": {"parameters": [{"name": "id", "in": "path", "schema": {"type": "string"}}]}},
                "/pets/mine": {"get": {"parameters": []}}
            }
        });
        let traverser = OpenApiTraverser::new(spec).unwrap();
        let op = traverser
            .get_operation_from_path_and_method("/pets/mine", "get")
            .unwrap();
        assert_eq!(op.path().format_path(), "paths/~1pets~1mine/get");
    }

    #[test]
    fn require_object_rejects_non_object() {
        let result = OpenApiTraverser::require_object(&json!("not an object"));
        assert!(matches!(result, Err(TraverserError::NotAnObject(_))));
    }

    #[test]
    fn require_array_rejects_non_array() {
        let result = OpenApiTraverser::require_array(&json!({"key": "value"}));
        assert!(matches!(result, Err(TraverserError::NotAnArray(_))));
    }
}
