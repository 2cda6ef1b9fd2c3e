//! # iro-color
//!
//! Color math and ordering for the iro pipeline.
//!
//! - **Hex parsing** - `#RRGGBB` / `RRGGBB` into 8-bit RGB
//! - **HLS** - the standard RGB <-> HLS transform, in `f64`
//! - **Classification** - black / white / gray / other buckets
//! - **Enrichment** - raw records into sorted [`EnrichedColor`]s
//!
//! # Quick Start
//!
//! ```rust
//! use iro_color::{hex_to_rgb_hls, classify, Thresholds};
//! use iro_core::Bucket;
//!
//! let (rgb, hls) = hex_to_rgb_hls("#ffffff").unwrap();
//! assert_eq!(rgb, [255, 255, 255]);
//! assert_eq!(classify(&hls, &Thresholds::default()), Bucket::White);
//! ```
//!
//! [`EnrichedColor`]: iro_core::EnrichedColor

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod classify;
pub mod enrich;
pub mod hex;
pub mod hls;

pub use classify::{classify, Thresholds};
pub use enrich::{convert, enrich_record, sort_by_bucket, Enricher};
pub use error::{ColorError, ColorResult};
pub use hex::{hex_to_rgb_hls, hex_to_rgb_hls_with, parse_hex, HexOptions};
pub use hls::{hls_to_rgb, rgb_to_hls, rgb8_to_unit, unit_to_rgb8};
