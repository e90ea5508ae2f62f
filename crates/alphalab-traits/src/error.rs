//! Error types for AlphaLab.
//!
//! Two kinds of failure reach callers: invalid input (an empty universe,
//! mismatched diagnostic inputs) and failures from the surrounding machinery
//! (polars, external engines). Degenerate statistics are not errors; the
//! diagnostics return `0.0` for them instead.

use thiserror::Error;

/// The main error type for AlphaLab operations.
#[derive(Debug, Error)]
pub enum AlphaLabError {
    /// Neither the call nor the alpha supplied a non-empty universe.
    #[error("Universe must be provided")]
    EmptyUniverse,

    /// Two sequences that must be paired have different lengths.
    #[error("Length mismatch: {left} vs {right} observations")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error when a required column is missing from a table.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Error reported by an external backtesting engine.
    #[error("Engine error: {0}")]
    Engine(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl AlphaLabError {
    /// Returns true for errors caused by the caller's input rather than by
    /// the library or an engine.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyUniverse | Self::LengthMismatch { .. })
    }
}

impl From<String> for AlphaLabError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for AlphaLabError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for AlphaLab operations.
pub type Result<T> = std::result::Result<T, AlphaLabError>;
