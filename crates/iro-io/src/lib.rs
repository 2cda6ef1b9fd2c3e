//! # iro-io
//!
//! Reading and writing the pipeline's JSON files.
//!
//! | File          | Shape                                   |
//! |---------------|-----------------------------------------|
//! | raw colors    | `[{name, value, romanized}, ...]`       |
//! | enriched      | `[{romanji, kanji, hex, rgb, hls}, ...]` |
//!
//! Enriched output is pretty-printed with a 4-space indent and keeps
//! non-ASCII text as-is, so kanji stay readable in the file.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let raw = iro_io::read_records(Path::new("colors.json"))?;
//! println!("{} colors", raw.len());
//! # Ok::<(), iro_core::Error>(())
//! ```

#![warn(missing_docs)]

mod json;

pub use json::{read_enriched, read_json, read_records, write_enriched, write_json};
