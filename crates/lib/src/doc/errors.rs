//! Error types for document access.
//!
//! Accessors fail in exactly three ways: nothing exists at the path, something
//! exists but cannot be converted to the requested representation, or the
//! requested list element representation is not one the engine converts to.

use thiserror::Error;

use super::value::Kind;

/// Structured error types for path access and coercion.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No value exists at the path and no fallback was supplied
    #[error("the path \"{path}\" does not exist")]
    NotFound { path: String },

    /// A value exists but cannot be converted to the requested representation
    #[error("cannot convert {actual} at \"{path}\"{} into {expected}", index_suffix(.index))]
    InvalidType {
        path: String,
        actual: Kind,
        expected: Kind,
        /// Position of the offending element when converting a list
        index: Option<usize>,
    },

    /// List element representation has no conversion rule
    #[error("type {target} is not supported as a list element")]
    UnsupportedType { target: Kind },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" [{i}]"),
        None => String::new(),
    }
}

impl AccessError {
    /// Check if this error means nothing exists at the path
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccessError::NotFound { .. })
    }

    /// Check if this error is a conversion failure
    pub fn is_type_error(&self) -> bool {
        matches!(self, AccessError::InvalidType { .. })
    }

    /// Check if this error is an unsupported list element type
    pub fn is_unsupported(&self) -> bool {
        matches!(self, AccessError::UnsupportedType { .. })
    }

    /// Get the path if this error is tied to one
    pub fn path(&self) -> Option<&str> {
        match self {
            AccessError::NotFound { path } | AccessError::InvalidType { path, .. } => Some(path),
            AccessError::UnsupportedType { .. } => None,
        }
    }

    /// Get the list element index if this is an element conversion failure
    pub fn index(&self) -> Option<usize> {
        match self {
            AccessError::InvalidType { index, .. } => *index,
            _ => None,
        }
    }
}

/// A conversion failure before it is tied to a path.
///
/// Produced by [`FromValue`](super::FromValue) implementations and lifted into
/// [`AccessError::InvalidType`] by the accessor that knows the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot convert {actual} into {expected}")]
pub struct CoerceError {
    pub actual: Kind,
    pub expected: Kind,
}

impl CoerceError {
    pub(crate) fn new(actual: Kind, expected: Kind) -> Self {
        Self { actual, expected }
    }

    /// Attaches the path (and optionally the list index) that was being read.
    pub fn at(self, path: impl Into<String>, index: Option<usize>) -> AccessError {
        AccessError::InvalidType {
            path: path.into(),
            actual: self.actual,
            expected: self.expected,
            index,
        }
    }
}

// Conversion from AccessError to the main Error type
impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
