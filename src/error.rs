use std::fmt::{Display, Formatter};

/// Where in the request/response lifecycle a [`ValidationError`] was raised.
/// Mirrors the `Section`/`PayloadSection` split the traverser used to carry,
/// flattened into the taxonomy spec'd directly: path, query, header, cookie,
/// requestBody, responseBody, schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationType {
    Path,
    Query,
    Header,
    Cookie,
    RequestBody,
    ResponseBody,
    Schema,
}

impl Display for ValidationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValidationType::Path => "path",
            ValidationType::Query => "query",
            ValidationType::Header => "header",
            ValidationType::Cookie => "cookie",
            ValidationType::RequestBody => "requestBody",
            ValidationType::ResponseBody => "responseBody",
            ValidationType::Schema => "schema",
        };
        write!(f, "{s}")
    }
}

/// The flat sub-type taxonomy. Kept string-free so `diagnostics.rs` stays
/// the single place that owns exact wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationSubType {
    NotFound,
    MethodNotAllowed,
    Missing,
    WrongType,
    BadDelimiter,
    BadExplode,
    ReservedNotEncoded,
    DeepObjectFlat,
    DeepObjectMulti,
    ContentType,
    Parse,
    CodeNotFound,
    Cancelled,
}

/// A single schema-validation violation as returned by the JSON-Schema
/// collaborator, preserved verbatim rather than flattened into a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaValidationError {
    /// JSON Pointer into the value that was validated.
    pub location: String,
    /// The collaborator's own explanation, untouched.
    pub reason: String,
}

/// One validation failure. Constructed only on failure; immutable once
/// built. A request/response that produces zero of these is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub validation_type: ValidationType,
    pub validation_sub_type: ValidationSubType,
    pub message: String,
    pub reason: String,
    /// 1-based line of the most specific relevant document node.
    pub spec_line: usize,
    /// 1-based column of the most specific relevant document node.
    pub spec_col: usize,
    pub how_to_fix: String,
    pub schema_error: Option<SchemaValidationError>,
    /// A short human label for the operation this error was raised
    /// against, e.g. `"GET /a/{fishy}/on/a/dishy"`. Kept as an owned
    /// label rather than a borrowed reference so `ValidationError` does
    /// not have to carry the document's lifetime.
    pub context: String,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}:{}): {}",
            self.message, self.spec_line, self.spec_col, self.reason
        )
    }
}

impl std::error::Error for ValidationError {}

/// Failures from resolving `$ref`s and walking the document tree. Kept
/// separate from [`ValidationError`] because a traversal failure usually
/// means the *document* is broken, not the request under validation --
/// this is what the base crate's `TraverserError` covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraverserError {
    FieldMissing(String),
    NotAnObject(String),
    NotAnArray(String),
    NotAString(String),
    NotABool(String),
    InvalidRef(String),
    CircularReference(String),
}

impl Display for TraverserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TraverserError::FieldMissing(field) => write!(f, "field '{field}' is missing"),
            TraverserError::NotAnObject(field) => write!(f, "field '{field}' is not an object"),
            TraverserError::NotAnArray(field) => write!(f, "field '{field}' is not an array"),
            TraverserError::NotAString(field) => write!(f, "field '{field}' is not a string"),
            TraverserError::NotABool(field) => write!(f, "field '{field}' is not a boolean"),
            TraverserError::InvalidRef(r) => write!(f, "could not resolve reference '{r}'"),
            TraverserError::CircularReference(r) => write!(f, "circular reference at '{r}'"),
        }
    }
}

impl std::error::Error for TraverserError {}

/// Errors that can only arise from programmer misuse at construction
/// time (a malformed document, an unsupported `openapi` version). These
/// never arise from validating a request or response -- per spec §7,
/// malformed *input* is this crate's subject matter, not a failure of
/// the crate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    UnsupportedVersion(String),
    Traversal(TraverserError),
    SchemaBuild(String),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::UnsupportedVersion(v) => write!(f, "unsupported openapi version '{v}'"),
            BuildError::Traversal(e) => write!(f, "failed to build validator: {e}"),
            BuildError::SchemaBuild(msg) => write!(f, "failed to build json schema: {msg}"),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<TraverserError> for BuildError {
    fn from(value: TraverserError) -> Self {
        BuildError::Traversal(value)
    }
}
