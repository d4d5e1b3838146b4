//! Validates in-flight HTTP requests and responses against an OpenAPI
//! 3.0.x/3.1.x document: path routing, parameter decoding per
//! `style`/`explode`, and request/response body schema validation.
//!
//! The facade is [`validator::OpenApiPayloadValidator`], built via
//! [`validator::builder::OpenApiPayloadValidatorBuilder`].

pub mod cache;
pub mod converter;
pub mod decoder;
pub mod diagnostics;
pub mod error;
pub mod meta_validator;
mod openapi_common;
mod openapi_v30x;
mod openapi_v31x;
pub(crate) mod schema_adapter;
pub mod source_map;
pub mod traverser;
pub mod types;
pub mod validator;

/// JSON Pointer path separator.
pub(crate) const PATH_SEPARATOR: char = '/';
pub(crate) const TILDE: char = '~';
pub(crate) const ENCODED_TILDE: &str = "~0";
pub(crate) const ENCODED_BACKSLASH: &str = "~1";

pub(crate) const OPENAPI_FIELD: &str = "openapi";
pub(crate) const PATHS_FIELD: &str = "paths";
pub(crate) const PARAMETERS_FIELD: &str = "parameters";
pub(crate) const NAME_FIELD: &str = "name";
pub(crate) const IN_FIELD: &str = "in";
pub(crate) const REQUIRED_FIELD: &str = "required";
pub(crate) const SCHEMA_FIELD: &str = "schema";
pub(crate) const STYLE_FIELD: &str = "style";
pub(crate) const EXPLODE_FIELD: &str = "explode";
pub(crate) const ALLOW_RESERVED_FIELD: &str = "allowReserved";
pub(crate) const REF_FIELD: &str = "$ref";
pub(crate) const CONTENT_FIELD: &str = "content";
pub(crate) const REQUEST_BODY_FIELD: &str = "requestBody";
pub(crate) const RESPONSES_FIELD: &str = "responses";
pub(crate) const DEFAULT_RESPONSE_FIELD: &str = "default";
pub(crate) const OPERATION_ID_FIELD: &str = "operationId";

pub use error::{BuildError, TraverserError, ValidationError};
pub use validator::builder::OpenApiPayloadValidatorBuilder;
pub use validator::OpenApiPayloadValidator;
