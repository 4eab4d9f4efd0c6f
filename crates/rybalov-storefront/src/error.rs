//! Storefront error types.

use rybalov_commerce::CommerceError;
use thiserror::Error;

/// Errors from interpreting storefront input (section labels, event lines).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Unknown navigation section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Malformed event line.
    #[error("Invalid event `{input}`: {reason}")]
    InvalidEvent { input: String, reason: String },

    /// Error on a specific line of an event script.
    #[error("line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: Box<StorefrontError>,
    },

    /// Error from the commerce layer.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl StorefrontError {
    pub(crate) fn invalid_event(input: &str, reason: impl Into<String>) -> Self {
        StorefrontError::InvalidEvent {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
