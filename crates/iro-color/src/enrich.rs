//! Raw records into ordered enriched colors.
//!
//! Output order is part of the contract: `other` by hue, then `white` by
//! lightness, `gray` by saturation, `black` by lightness. Every bucket is
//! sorted with a stable sort on its single key, so ties keep input order.

use crate::classify::{classify, Thresholds};
use crate::error::{ColorError, ColorResult};
use crate::hex::{hex_to_rgb_hls_with, HexOptions};
use iro_core::{Bucket, ColorRecord, EnrichedColor};
use tracing::{debug, trace};

/// Enrichment settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Enricher {
    /// Bucket thresholds.
    pub thresholds: Thresholds,
    /// Hex parsing options.
    pub hex: HexOptions,
}

impl Enricher {
    /// Creates an enricher with the given thresholds and hex options.
    pub fn new(thresholds: Thresholds, hex: HexOptions) -> Self {
        Self { thresholds, hex }
    }

    /// Enriches and orders `records`.
    ///
    /// Stops at the first record whose hex does not parse.
    pub fn convert(&self, records: &[ColorRecord]) -> ColorResult<Vec<EnrichedColor>> {
        trace!(records = records.len(), "Enricher::convert");
        self.thresholds.validate()?;

        let enriched = records
            .iter()
            .enumerate()
            .map(|(index, rec)| {
                enrich_record(rec, self.hex).map_err(|e| ColorError::Record {
                    index,
                    romanized: rec.romanized.clone(),
                    source: Box::new(e),
                })
            })
            .collect::<ColorResult<Vec<_>>>()?;

        Ok(sort_by_bucket(enriched, &self.thresholds))
    }
}

/// Enriches and orders `records` with default thresholds and lenient hex parsing.
///
/// # Example
///
/// ```rust
/// use iro_color::convert;
/// use iro_core::ColorRecord;
///
/// let out = convert(&[
///     ColorRecord::new("墨", "#000000", "SUMI"),
///     ColorRecord::new("紫", "#8F77B5", "MURASAKI"),
///     ColorRecord::new("白", "#FFFFFF", "SHIRO"),
/// ]).unwrap();
/// let names: Vec<_> = out.iter().map(|c| c.romanji.as_str()).collect();
/// assert_eq!(names, ["murasaki", "shiro", "sumi"]);
/// ```
pub fn convert(records: &[ColorRecord]) -> ColorResult<Vec<EnrichedColor>> {
    Enricher::default().convert(records)
}

/// Derives an [`EnrichedColor`] from one raw record.
pub fn enrich_record(rec: &ColorRecord, opts: HexOptions) -> ColorResult<EnrichedColor> {
    let (rgb, hls) = hex_to_rgb_hls_with(&rec.value, opts)?;
    Ok(EnrichedColor {
        romanji: rec.romanized.to_lowercase(),
        kanji: rec.name.clone(),
        hex: rec.value.clone(),
        rgb,
        hls,
    })
}

/// Splits colors into buckets, sorts each one and concatenates them in
/// [`Bucket::OUTPUT_ORDER`].
pub fn sort_by_bucket(colors: Vec<EnrichedColor>, thresholds: &Thresholds) -> Vec<EnrichedColor> {
    let total = colors.len();
    let mut buckets: [Vec<EnrichedColor>; 4] = Default::default();
    for c in colors {
        let bucket = classify(&c.hls, thresholds);
        buckets[bucket.output_rank()].push(c);
    }

    let mut out = Vec::with_capacity(total);
    for (bucket, mut group) in Bucket::OUTPUT_ORDER.into_iter().zip(buckets) {
        // sort_by is stable
        group.sort_by(|a, b| bucket.sort_key(&a.hls).total_cmp(&bucket.sort_key(&b.hls)));
        debug!(bucket = %bucket, count = group.len(), "Sorted bucket");
        out.extend(group);
    }
    out
}
