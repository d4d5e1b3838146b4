use crate::error::BuildError;
use jsonschema::Draft;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The two OpenAPI document families this crate understands. Drives
/// which JSON Schema draft the schema adapter compiles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenApiVersion {
    V30x,
    V31x,
}

impl Display for OpenApiVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenApiVersion::V30x => write!(f, "3.0.x"),
            OpenApiVersion::V31x => write!(f, "3.1.x"),
        }
    }
}

impl FromStr for OpenApiVersion {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("3.1") {
            Ok(OpenApiVersion::V31x)
        } else if s.starts_with("3.0") {
            Ok(OpenApiVersion::V30x)
        } else {
            Err(BuildError::UnsupportedVersion(s.to_string()))
        }
    }
}

impl OpenApiVersion {
    /// 3.0.x schemas are Draft4-flavored (`nullable`, no `$recursiveRef`);
    /// 3.1.x schemas are plain Draft 2020-12.
    pub(crate) fn get_draft(&self) -> Draft {
        match self {
            OpenApiVersion::V30x => Draft::Draft4,
            OpenApiVersion::V31x => Draft::Draft202012,
        }
    }
}
