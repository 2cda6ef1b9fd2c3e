//! Error types for iro operations.
//!
//! Every failure in the pipeline is fatal for the run: nothing here is
//! recovered locally, the caller reports the error and stops.
//!
//! Color parsing failures live in `iro-color` (`ColorError`); this module
//! covers the file-level failures shared by every stage.
//!
//! # Usage
//!
//! ```rust
//! use iro_core::{Error, Result};
//! use std::path::Path;
//!
//! fn require(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(Error::MissingFile { path: path.to_path_buf() });
//!     }
//!     Ok(())
//! }
//!
//! assert!(require(Path::new("does/not/exist.json")).is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing pipeline files.
#[derive(Debug, Error)]
pub enum Error {
    /// Expected JSON input does not exist.
    #[error("file not found: {}", path.display())]
    MissingFile {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Input exists but is not valid JSON for the expected shape.
    #[error("malformed JSON in {}: {source}", path.display())]
    MalformedJson {
        /// Path of the file being parsed.
        path: PathBuf,
        /// Underlying parser error (carries line/column).
        #[source]
        source: serde_json::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
