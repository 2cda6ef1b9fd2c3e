//! # iro-core
//!
//! Core types shared by every iro crate.
//!
//! - [`ColorRecord`] - raw entry as found in the source dataset
//! - [`EnrichedColor`] - entry with derived RGB/HLS values, ready for rendering
//! - [`Bucket`] - black/white/gray/other classification used for ordering
//! - [`Error`] - failure modes shared across the pipeline
//!
//! ## Crate Structure
//!
//! ```text
//! iro-core (this crate)
//!    ^
//!    |
//!    +-- iro-color (hex parsing, HLS transform, enrichment)
//!    +-- iro-io (JSON read/write)
//!    +-- iro-render (SVG cards, Markdown index)
//!    +-- iro-cli (the `iro` binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bucket;
pub mod error;
pub mod record;

pub use bucket::Bucket;
pub use error::{Error, Result};
pub use record::{ColorRecord, EnrichedColor, Hls, Rgb8};
