pub mod json_path;
pub mod operation;
pub mod primitive;
pub mod style;
pub mod version;

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ParameterLocation {
    Header,
    Query,
    Cookie,
    Path,
}

impl Display for ParameterLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = String::from(match self {
            ParameterLocation::Header => "header",
            ParameterLocation::Query => "query",
            ParameterLocation::Cookie => "cookie",
            ParameterLocation::Path => "path",
        });
        write!(f, "{}", str)
    }
}

/// The JSON-shaped tagged value decoded parameters and bodies take,
/// per spec §3. A `Mapping` preserves insertion order (matters for
/// `deepObject` decoding, where property order should follow the order
/// the bracketed keys were first seen on the wire) so it is backed by
/// an `IndexMap`, not a `HashMap`.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<DecodedValue>),
    Mapping(IndexMap<String, DecodedValue>),
}

impl DecodedValue {
    /// Converts to the `serde_json::Value` the schema-validation
    /// collaborator (component C) actually consumes.
    pub fn to_json(&self) -> Value {
        match self {
            DecodedValue::Null => Value::Null,
            DecodedValue::Bool(b) => Value::Bool(*b),
            DecodedValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            DecodedValue::String(s) => Value::String(s.clone()),
            DecodedValue::Sequence(items) => {
                Value::Array(items.iter().map(DecodedValue::to_json).collect())
            }
            DecodedValue::Mapping(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }

    pub(crate) fn from_leaf_json(value: Value) -> DecodedValue {
        match value {
            Value::Null => DecodedValue::Null,
            Value::Bool(b) => DecodedValue::Bool(b),
            Value::Number(n) => DecodedValue::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => DecodedValue::String(s),
            Value::Array(items) => {
                DecodedValue::Sequence(items.into_iter().map(DecodedValue::from_leaf_json).collect())
            }
            Value::Object(map) => DecodedValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, DecodedValue::from_leaf_json(v)))
                    .collect(),
            ),
        }
    }
}

/// The shape of a parameter's declared schema, as far as the decoder
/// needs to know it: just enough to pick the right entry in the
/// style/explode dispatch table (spec §9).
#[derive(Debug, Clone)]
pub enum SchemaKind {
    Scalar(primitive::OpenApiPrimitives),
    Array(primitive::OpenApiPrimitives),
    Object,
}

impl SchemaKind {
    /// Inspects a (already `$ref`-resolved) schema fragment and
    /// classifies it. Falls back to `Scalar(String)` for a schema with
    /// no recognizable `type`, matching rule 5's "anything else remains
    /// a string".
    pub fn from_schema(schema: &Value) -> SchemaKind {
        match schema.get("type").and_then(Value::as_str) {
            Some("array") => {
                let item_type = schema
                    .get("items")
                    .and_then(primitive::OpenApiPrimitives::from_schema)
                    .unwrap_or(primitive::OpenApiPrimitives::String);
                SchemaKind::Array(item_type)
            }
            Some("object") => SchemaKind::Object,
            Some(other) => SchemaKind::Scalar(
                other
                    .parse::<primitive::OpenApiPrimitives>()
                    .unwrap_or(primitive::OpenApiPrimitives::String),
            ),
            None => SchemaKind::Scalar(primitive::OpenApiPrimitives::String),
        }
    }
}


