use crate::error::TraverserError;
use serde_json::{Value, json};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The JSON Schema primitive kinds a node can declare via its `type`
/// field. Used both for path-parameter type coercion during matching
/// (component A) and scalar leaf coercion during decoding (component B).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpenApiPrimitives {
    Null,
    Bool,
    Integer,
    Array,
    Number,
    String,
    Object,
}

impl Display for OpenApiPrimitives {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenApiPrimitives::Null => write!(f, "null"),
            OpenApiPrimitives::Bool => write!(f, "boolean"),
            OpenApiPrimitives::Integer => write!(f, "integer"),
            OpenApiPrimitives::Array => write!(f, "array"),
            OpenApiPrimitives::Number => write!(f, "number"),
            OpenApiPrimitives::String => write!(f, "string"),
            OpenApiPrimitives::Object => write!(f, "object"),
        }
    }
}

impl FromStr for OpenApiPrimitives {
    type Err = TraverserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "null" => Ok(OpenApiPrimitives::Null),
            "bool" | "boolean" => Ok(OpenApiPrimitives::Bool),
            "integer" => Ok(OpenApiPrimitives::Integer),
            "number" => Ok(OpenApiPrimitives::Number),
            "string" => Ok(OpenApiPrimitives::String),
            "array" => Ok(OpenApiPrimitives::Array),
            "object" => Ok(OpenApiPrimitives::Object),
            other => Err(TraverserError::NotAString(format!(
                "unrecognized schema type '{other}'"
            ))),
        }
    }
}

impl OpenApiPrimitives {
    pub fn from_schema(schema: &Value) -> Option<OpenApiPrimitives> {
        schema
            .get("type")
            .and_then(Value::as_str)
            .and_then(|s| OpenApiPrimitives::from_str(s).ok())
    }

    pub fn get_type_from_serde(value: &Value) -> Option<OpenApiPrimitives> {
        if value.is_string() {
            Some(OpenApiPrimitives::String)
        } else if value.is_array() {
            Some(OpenApiPrimitives::Array)
        } else if value.is_object() {
            Some(OpenApiPrimitives::Object)
        } else if value.is_null() {
            Some(OpenApiPrimitives::Null)
        } else if value.is_boolean() {
            Some(OpenApiPrimitives::Bool)
        } else if value.is_number() {
            Some(OpenApiPrimitives::Number)
        } else {
            None
        }
    }
}

/// Coerces a single decoded token into the JSON value its declared leaf
/// type requires, per spec §4.B rule 5:
///
/// - `"true"`/`"false"` (exact, case-sensitive) become a boolean.
/// - a token that parses as an IEEE-754 double becomes a number.
/// - anything else is left as a string, and a `string`-typed schema
///   accepts any token unconditionally.
///
/// Returns `Err(())` when the declared type cannot be produced from the
/// token; callers turn that into a `wrongType` diagnostic.
pub fn coerce_leaf_token(declared: OpenApiPrimitives, token: &str) -> Result<Value, ()> {
    match declared {
        OpenApiPrimitives::String => Ok(json!(token)),
        OpenApiPrimitives::Bool => match token {
            "true" => Ok(json!(true)),
            "false" => Ok(json!(false)),
            _ => Err(()),
        },
        OpenApiPrimitives::Integer => token
            .parse::<i64>()
            .map(|v| json!(v))
            .map_err(|_| ()),
        OpenApiPrimitives::Number => token
            .parse::<f64>()
            .map(|v| json!(v))
            .map_err(|_| ()),
        OpenApiPrimitives::Null => {
            if token.is_empty() {
                Ok(Value::Null)
            } else {
                Err(())
            }
        }
        OpenApiPrimitives::Array | OpenApiPrimitives::Object => Err(()),
    }
}

/// Infers the leaf JSON value a bare token would coerce to when no
/// declared type constrains it (used for the default, schema-less
/// coercion path): `"true"`/`"false"` become booleans, a lexically
/// valid double becomes a number, everything else stays a string.
pub fn infer_leaf_token(token: &str) -> Value {
    match token {
        "true" => json!(true),
        "false" => json!(false),
        _ => match token.parse::<f64>() {
            Ok(n) if !token.is_empty() => json!(n),
            _ => json!(token),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_boolean_literals() {
        assert_eq!(
            coerce_leaf_token(OpenApiPrimitives::Bool, "true").unwrap(),
            json!(true)
        );
        assert_eq!(
            coerce_leaf_token(OpenApiPrimitives::Bool, "false").unwrap(),
            json!(false)
        );
        assert!(coerce_leaf_token(OpenApiPrimitives::Bool, "cod").is_err());
    }

    #[test]
    fn coerces_number_lexically() {
        assert_eq!(
            coerce_leaf_token(OpenApiPrimitives::Number, "3.14").unwrap(),
            json!(3.14)
        );
        assert!(coerce_leaf_token(OpenApiPrimitives::Number, "cod").is_err());
    }

    #[test]
    fn string_accepts_any_token() {
        assert_eq!(
            coerce_leaf_token(OpenApiPrimitives::String, "anything at all").unwrap(),
            json!("anything at all")
        );
    }

    #[test]
    fn infer_prefers_bool_then_number_then_string() {
        assert_eq!(infer_leaf_token("true"), json!(true));
        assert_eq!(infer_leaf_token("42"), json!(42.0));
        assert_eq!(infer_leaf_token("cod"), json!("cod"));
    }
}
