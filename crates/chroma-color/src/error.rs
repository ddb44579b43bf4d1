//! Error types for color conversions.
//!
//! Only profile matrix derivation can fail. Numeric domain problems
//! (fractional powers of negative channels, zero white components) are not
//! errors: they propagate as NaN or infinity, and round trips rely on that
//! staying consistent.

use chroma_primaries::PrimariesError;
use thiserror::Error;

/// Color conversion error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Profile matrix could not be derived (degenerate primaries).
    #[error(transparent)]
    Primaries(#[from] PrimariesError),
}

impl ColorError {
    /// True when the failure comes from linearly dependent primaries.
    pub fn is_degenerate_profile(&self) -> bool {
        matches!(self, Self::Primaries(PrimariesError::DegenerateProfile { .. }))
    }
}

/// Result type for color conversions.
pub type ColorResult<T> = Result<T, ColorError>;
