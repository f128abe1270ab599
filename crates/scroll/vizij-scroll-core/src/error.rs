//! Error types for registration, revoke and action callbacks.

use thiserror::Error;

/// Errors surfaced synchronously by [`crate::ScrollWatcher`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScrollError {
    /// No watch entry matched the revoke selector.
    #[error("no watch entry matches {selector}")]
    NotFound { selector: String },

    /// A selector or option was malformed.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An id was registered twice while unique ids are enforced.
    #[error("watch entry id '{id}' is already registered")]
    DuplicateId { id: String },
}

impl ScrollError {
    /// Get error category for logging and host error mapping.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::DuplicateId { .. } => "duplicate_id",
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Failure reported by an action callback during a tick.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Scroll core result type
pub type Result<T> = core::result::Result<T, ScrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        let nf = ScrollError::NotFound {
            selector: "id 'hero'".into(),
        };
        assert_eq!(nf.category(), "not_found");
        assert_eq!(nf.to_string(), "no watch entry matches id 'hero'");
        assert_eq!(
            ScrollError::invalid("empty selector").category(),
            "invalid_argument"
        );
    }
}
