use std::fmt;
use thiserror::Error;

/// One step in a decode path: a record field / mapping key, or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Chain of fields and indices from the payload root to the node being decoded.
///
/// Displayed JSONPath-style: `$`, `$.users[2].name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodePath {
    segments: Vec<PathSegment>,
}

impl DecodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Run `f` with `key` pushed onto the path.
    pub fn with_field<T>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.segments.push(PathSegment::Field(key.to_string()));
        let out = f(self);
        self.segments.pop();
        out
    }

    /// Run `f` with `index` pushed onto the path.
    pub fn with_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.segments.push(PathSegment::Index(index));
        let out = f(self);
        self.segments.pop();
        out
    }

    /// Build an error located at the current node.
    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError {
            path: self.clone(),
            kind,
        }
    }
}

impl fmt::Display for DecodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    #[error("expected {expected}, found {actual}")]
    ShapeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("cannot decode @{tag} wrapper into {expected}")]
    UnsupportedWrapperCoercion { tag: String, expected: &'static str },

    #[error("unrecognized wrapper tag @{0}")]
    UnrecognizedTag(String),

    #[error("value {value} does not fit in {expected}")]
    OutOfRange { value: String, expected: &'static str },

    #[error("invalid @{tag} payload: {reason}")]
    InvalidWrapperPayload { tag: String, reason: String },
}

/// Failure of a single decode call. Carries the path of the offending node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("decode error at {path}: {kind}")]
pub struct DecodeError {
    pub path: DecodePath,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn path(&self) -> &DecodePath {
        &self.path
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::ShapeMismatch { .. })
    }

    pub fn is_unsupported_wrapper(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnsupportedWrapperCoercion { .. })
    }
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Malformed `query_tags` encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    #[error("query tag '{0}' is not a key=value pair")]
    MissingSeparator(String),

    #[error("query tag '{0}' has an empty key")]
    EmptyKey(String),

    #[error("query tags must be text, found {0}")]
    NotText(&'static str),
}

#[derive(Error, Debug)]
pub enum ResponseError {
    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Invalid query tags: {0}")]
    QueryTags(#[from] TagParseError),
}

pub type ResponseResult<T> = std::result::Result<T, ResponseError>;

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::Parse(err.to_string())
    }
}
