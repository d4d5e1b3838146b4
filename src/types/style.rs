use std::fmt::{Display, Formatter};

/// OpenAPI's parameter serialization styles, restricted to the ones
/// spec'd for query/header/cookie/path parameters (simple/matrix/label
/// are not part of this crate's scope).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Form,
    SpaceDelimited,
    PipeDelimited,
    DeepObject,
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Style::Form => "form",
            Style::SpaceDelimited => "spaceDelimited",
            Style::PipeDelimited => "pipeDelimited",
            Style::DeepObject => "deepObject",
        };
        write!(f, "{s}")
    }
}

impl Style {
    /// Resolves a parameter's declared `style`, defaulting to `form`
    /// when absent, per spec §4.B.
    pub fn parse(declared: Option<&str>) -> Style {
        match declared {
            Some("spaceDelimited") => Style::SpaceDelimited,
            Some("pipeDelimited") => Style::PipeDelimited,
            Some("deepObject") => Style::DeepObject,
            _ => Style::Form,
        }
    }

    /// Default `explode`: `true` for `form`, `false` for everything else.
    pub fn default_explode(self) -> bool {
        matches!(self, Style::Form)
    }

    /// The single delimiter character this style's non-exploded array
    /// encoding uses. `None` for `deepObject`, which has no array form.
    pub fn delimiter(self) -> Option<char> {
        match self {
            Style::Form => Some(','),
            Style::SpaceDelimited => Some(' '),
            Style::PipeDelimited => Some('|'),
            Style::DeepObject => None,
        }
    }

    /// Every delimiter character recognized by *any* style, used to spot
    /// a value delimited with the wrong character for its declared style
    /// (spec §8 scenario 8).
    pub fn all_delimiters() -> &'static [char] {
        &[',', ' ', '|']
    }
}
