//! Error types for profile and matrix derivation.

use thiserror::Error;

/// Result type for primaries operations.
pub type PrimariesResult<T> = Result<T, PrimariesError>;

/// Errors raised while deriving or decomposing profile matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimariesError {
    /// The primaries are linearly dependent, so no RGB/XYZ matrix exists.
    #[error("degenerate profile '{name}': primaries are linearly dependent")]
    DegenerateProfile {
        /// Name of the offending profile.
        name: String,
    },

    /// No built-in profile has this name.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
}
