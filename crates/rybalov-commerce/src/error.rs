//! Commerce error types.
//!
//! Cart operations are total and never produce these; they only come from
//! parsing labels supplied by callers.

use thiserror::Error;

/// Errors that can occur while interpreting commerce input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Unknown tutorial filter label.
    #[error("Unknown tutorial filter: {0} (expected all, video or article)")]
    UnknownFilter(String),

    /// Unknown difficulty label.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}
