//! Component C: the Schema Validation Adapter.
//!
//! A thin wrapper around the `jsonschema` crate, grounded in the
//! `validation_options.build(schema)` / `JsonValidator` pattern the
//! teacher's `validator/builder.rs` and `validator/mod.rs` already use.
//! Two differences from the teacher's own `do_validate`: this collects
//! *every* violation via `iter_errors` instead of stopping at the first
//! one (spec §4.C invariant), and it never flattens a collaborator
//! error into a string before handing it back -- the instance path and
//! message are preserved as a [`SchemaValidationError`] for the caller
//! to fold into a [`crate::error::ValidationError`].

use crate::error::{BuildError, SchemaValidationError};
use dashmap::DashMap;
use jsonschema::{Resource, ValidationOptions, Validator as JsonValidator};
use serde_json::Value;
use std::sync::Arc;

/// Caches compiled validators by the JSON Pointer of the schema they
/// were built from, so repeated requests against the same operation
/// don't recompile the same schema. Insert-only: a document never
/// changes shape once a validator is built against it.
pub(crate) struct SchemaAdapter {
    options: ValidationOptions,
    compiled: DashMap<String, Arc<JsonValidator>>,
}

impl SchemaAdapter {
    pub(crate) fn new(draft: jsonschema::Draft, root_id: &str, document: Value) -> Result<Self, BuildError> {
        let resource = Resource::from_contents(document)
            .map_err(|e| BuildError::SchemaBuild(e.to_string()))?;
        let options = JsonValidator::options()
            .with_draft(draft)
            .with_resource(root_id, resource);
        Ok(SchemaAdapter {
            options,
            compiled: DashMap::new(),
        })
    }

    fn validator_for(&self, pointer: &str, schema: &Value) -> Result<Arc<JsonValidator>, BuildError> {
        if let Some(existing) = self.compiled.get(pointer) {
            return Ok(existing.clone());
        }
        let validator = self
            .options
            .build(schema)
            .map_err(|e| BuildError::SchemaBuild(e.to_string()))?;
        let validator = Arc::new(validator);
        self.compiled.insert(pointer.to_string(), validator.clone());
        Ok(validator)
    }

    /// Validates `instance` against the schema located at `pointer`
    /// (typically a `$ref` into the document), returning every violation
    /// rather than just the first.
    pub(crate) fn validate_all(
        &self,
        pointer: &str,
        schema: &Value,
        instance: &Value,
    ) -> Result<Vec<SchemaValidationError>, BuildError> {
        let validator = self.validator_for(pointer, schema)?;
        let errors = validator
            .iter_errors(instance)
            .map(|e| SchemaValidationError {
                location: e.instance_path.to_string(),
                reason: e.to_string(),
            })
            .collect();
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_every_violation_not_just_the_first() {
        let document = json!({"$id": "@@root"});
        let adapter = SchemaAdapter::new(jsonschema::Draft::Draft202012, "@@root", document).unwrap();
        let schema = json!({
            "type": "object",
            "required": ["name", "age"],
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"}
            }
        });
        let instance = json!({"name": 5, "age": "old"});
        let errors = adapter.validate_all("#/components/schemas/Pet", &schema, &instance).unwrap();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn valid_instance_produces_no_errors() {
        let document = json!({"$id": "@@root"});
        let adapter = SchemaAdapter::new(jsonschema::Draft::Draft202012, "@@root", document).unwrap();
        let schema = json!({"type": "string"});
        let errors = adapter.validate_all("#/x", &schema, &json!("ok")).unwrap();
        assert!(errors.is_empty());
    }
}
