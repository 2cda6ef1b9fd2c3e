//! Render error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while writing cards or the index.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Reading the enriched list failed.
    #[error(transparent)]
    Core(#[from] iro_core::Error),

    /// XML serialization failed.
    #[error("SVG write error: {0}")]
    Xml(String),

    /// Writing an output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
