//! Error types for color operations.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Hex string is not three parseable byte pairs.
    #[error("malformed color '{hex}': {reason}")]
    MalformedColor {
        /// The offending hex string, as given.
        hex: String,
        /// What went wrong.
        reason: String,
    },

    /// Classification thresholds are out of range or inconsistent.
    #[error("invalid thresholds: {0}")]
    InvalidThresholds(String),

    /// A record failed to enrich.
    #[error("record #{index} ('{romanized}'): {source}")]
    Record {
        /// Position of the record in the input list.
        index: usize,
        /// Romanized name of the record, as given.
        romanized: String,
        /// Underlying failure.
        #[source]
        source: Box<ColorError>,
    },
}

impl ColorError {
    pub(crate) fn malformed(hex: &str, reason: impl Into<String>) -> Self {
        Self::MalformedColor {
            hex: hex.to_string(),
            reason: reason.into(),
        }
    }

    /// Strips any [`ColorError::Record`] wrapping.
    pub fn root(&self) -> &ColorError {
        match self {
            Self::Record { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
