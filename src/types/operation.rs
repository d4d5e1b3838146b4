use crate::types::json_path::JsonPath;
use crate::{ENCODED_BACKSLASH, ENCODED_TILDE};
use serde::Serialize;
use serde_json::Value;

/// A resolved operation: the raw `Operation` object from the document,
/// plus the JSON Pointer path it was found at (used to build `$ref`
/// schemas such as `@@root#/paths/~1pets/get/parameters/0/schema`).
#[derive(Debug, Serialize, Clone)]
pub struct Operation {
    pub(crate) data: Value,

    #[serde(skip_serializing)]
    pub(crate) path: JsonPath,
}

impl Operation {
    pub(crate) fn new(data: Value, path: JsonPath) -> Self {
        Self { data, path }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    /// A short human label used in `ValidationError::context`, e.g.
    /// `"GET /a/{fishy}/on/a/dishy"`.
    pub(crate) fn label(&self, method: &str, request_path_template: &str) -> String {
        format!("{} {}", method.to_uppercase(), request_path_template)
    }

    /// The original spec path template this operation was found at
    /// (e.g. `/pets/{id}`), decoded back from the JSON-Pointer-escaped
    /// second segment of `self.path`.
    pub fn path_template(&self) -> String {
        self.path
            .0
            .get(1)
            .map(|segment| {
                segment
                    .replace(ENCODED_BACKSLASH, "/")
                    .replace(ENCODED_TILDE, "~")
            })
            .unwrap_or_default()
    }
}
