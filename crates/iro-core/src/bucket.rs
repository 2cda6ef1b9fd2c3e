//! Lightness/saturation buckets.
//!
//! Buckets only decide where a color lands in the output list. They are never
//! persisted.

use crate::record::{Hls, HUE, LIGHTNESS, SATURATION};
use std::fmt;

/// Classification group for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Very dark colors.
    Black,
    /// Very light colors.
    White,
    /// Low saturation, mid lightness.
    Gray,
    /// Everything else.
    Other,
}

impl Bucket {
    /// Order in which buckets are concatenated into the output list.
    pub const OUTPUT_ORDER: [Bucket; 4] = [Bucket::Other, Bucket::White, Bucket::Gray, Bucket::Black];

    /// Index into [`Hls`] of the key this bucket is sorted by.
    pub fn sort_channel(self) -> usize {
        match self {
            Bucket::Black | Bucket::White => LIGHTNESS,
            Bucket::Gray => SATURATION,
            Bucket::Other => HUE,
        }
    }

    /// Sort key of `hls` within this bucket.
    #[inline]
    pub fn sort_key(self, hls: &Hls) -> f64 {
        hls[self.sort_channel()]
    }

    /// Position of this bucket in [`Bucket::OUTPUT_ORDER`].
    pub fn output_rank(self) -> usize {
        match self {
            Bucket::Other => 0,
            Bucket::White => 1,
            Bucket::Gray => 2,
            Bucket::Black => 3,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Bucket::Black => "black",
            Bucket::White => "white",
            Bucket::Gray => "gray",
            Bucket::Other => "other",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
