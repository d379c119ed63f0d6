//! Decode failures.
//!
//! Every failure is a value. Leaf errors describe what went wrong at a single
//! JSON value; [`DecodeError::Nested`] wraps a child failure and records which
//! object key or array index led to it, so the error returned from the root
//! carries the complete path.

use thiserror::Error;

use crate::json::{JsonPath, PathSegment};

/// Failure while decoding an LDtk JSON value into the typed model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required key is absent from a JSON object.
    #[error("missing required field")]
    MissingField,

    /// A key holds a JSON value of the wrong kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A string is not a member of its closed set of literals.
    #[error(
        "unrecognized {union_name} value \"{literal}\" (expected one of: {})",
        .accepted.join(", ")
    )]
    InvalidUnionLiteral {
        union_name: &'static str,
        literal: String,
        accepted: &'static [&'static str],
    },

    /// A fixed-length tuple array has the wrong number of elements.
    #[error("expected an array of exactly {expected} elements, found {found}")]
    MalformedFixedArray { expected: usize, found: usize },

    /// Failure inside a child value.
    #[error("{}: {}", nested_path(.segment, .inner), .inner.root_cause())]
    Nested {
        segment: PathSegment,
        inner: Box<DecodeError>,
    },
}

fn nested_path(segment: &PathSegment, inner: &DecodeError) -> JsonPath {
    std::iter::once(segment.clone())
        .chain(inner.path().segments().iter().cloned())
        .collect()
}

impl DecodeError {
    /// Wrap this error as having happened under `segment`.
    pub fn within(self, segment: impl Into<PathSegment>) -> Self {
        DecodeError::Nested {
            segment: segment.into(),
            inner: Box::new(self),
        }
    }

    pub fn within_key(self, key: &str) -> Self {
        self.within(PathSegment::Key(key.to_string()))
    }

    pub fn within_index(self, index: usize) -> Self {
        self.within(PathSegment::Index(index))
    }

    /// Path from the point where decoding started to the failing value.
    pub fn path(&self) -> JsonPath {
        let mut path = JsonPath::root();
        let mut current = self;
        while let DecodeError::Nested { segment, inner } = current {
            path.push(segment.clone());
            current = inner;
        }
        path
    }

    /// The leaf failure, with every [`DecodeError::Nested`] layer removed.
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let DecodeError::Nested { inner, .. } = current {
            current = inner;
        }
        current
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self.root_cause(), DecodeError::MissingField)
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.root_cause(), DecodeError::TypeMismatch { .. })
    }

    pub fn is_invalid_union_literal(&self) -> bool {
        matches!(self.root_cause(), DecodeError::InvalidUnionLiteral { .. })
    }

    pub fn is_malformed_fixed_array(&self) -> bool {
        matches!(self.root_cause(), DecodeError::MalformedFixedArray { .. })
    }
}

/// Error returned by the text-level entry points.
#[derive(Debug, Error)]
pub enum LdtkError {
    /// The text is not JSON at all.
    #[error("invalid JSON text: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON does not describe a supported LDtk document.
    #[error("invalid LDtk document: {0}")]
    Decode(#[from] DecodeError),
}

impl LdtkError {
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            LdtkError::Decode(err) => Some(err),
            LdtkError::Json(_) => None,
        }
    }
}
