//! Error types
//!
//! Two very different things live here:
//!
//! - [`ErrorPayload`] is *data*: what a failing descriptor contributes to a
//!   [`ValidationResult`](crate::ValidationResult).
//! - [`DescriptorError`] is a real error: the descriptor list itself is
//!   malformed and validation cannot start.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR PAYLOAD
// ============================================================================

/// Prefix of every generated message.
pub const MESSAGE_PREFIX: &str = "Object must contain a valid value for ";

/// Error reported for one failing descriptor.
///
/// Serializes untagged: a custom payload serializes as itself, a generated
/// one as `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorPayload<E = serde_json::Value> {
    /// Message synthesized from the descriptor's paths.
    Generated {
        /// Human-readable message
        message: Cow<'static, str>,
    },
    /// The descriptor's own error value, returned verbatim.
    Custom(E),
}

impl<E> ErrorPayload<E> {
    /// Builds the generated payload for a list of candidate paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_require::foundation::ErrorPayload;
    ///
    /// let err: ErrorPayload = ErrorPayload::missing(&["a", "b", "c"]);
    /// assert_eq!(
    ///     err.generated_message(),
    ///     Some("Object must contain a valid value for a, b, or c")
    /// );
    /// ```
    pub fn missing<S: AsRef<str>>(paths: &[S]) -> Self {
        Self::Generated {
            message: format!("{MESSAGE_PREFIX}{}", join_alternatives(paths)).into(),
        }
    }

    /// Returns the generated message, or `None` for a custom payload.
    pub fn generated_message(&self) -> Option<&str> {
        match self {
            Self::Generated { message } => Some(&**message),
            Self::Custom(_) => None,
        }
    }

    /// Returns true for a custom payload.
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl ErrorPayload<serde_json::Value> {
    /// Returns a message for either variant.
    ///
    /// Custom payloads yield their `message` string field when they have one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Generated { message } => Some(&**message),
            Self::Custom(value) => value.get("message").and_then(serde_json::Value::as_str),
        }
    }
}

impl<E: fmt::Display> fmt::Display for ErrorPayload<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated { message } => f.write_str(message),
            Self::Custom(e) => e.fmt(f),
        }
    }
}

/// Joins candidate paths as `a`, `a or b`, or `a, b, or c`.
pub fn join_alternatives<S: AsRef<str>>(paths: &[S]) -> String {
    match paths {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let mut joined = String::new();
            for path in init {
                joined.push_str(path.as_ref());
                joined.push_str(", ");
            }
            joined.push_str("or ");
            joined.push_str(last.as_ref());
            joined
        }
    }
}

// ============================================================================
// DESCRIPTOR ERROR
// ============================================================================

/// A descriptor list that cannot be evaluated.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DescriptorError {
    /// `required` was given as an empty list.
    #[error("descriptor #{index} has no required paths")]
    NoPaths {
        /// Position of the descriptor in the list
        index: usize,
    },

    /// One of the required paths is an empty string.
    #[error("descriptor #{index} has an empty path at position {position}")]
    EmptyPath {
        /// Position of the descriptor in the list
        index: usize,
        /// Position of the path within `required`
        position: usize,
    },

    /// Descriptor JSON could not be decoded.
    #[error("invalid descriptor json: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DescriptorError {
    /// Index of the offending descriptor, when known.
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::NoPaths { index } | Self::EmptyPath { index, .. } => Some(*index),
            Self::Parse(_) => None,
        }
    }
}
