//! CLI command implementations

pub mod build;
pub mod enrich;
pub mod images;
pub mod index;
pub mod show;

use anyhow::{Context, Result};
use iro_core::EnrichedColor;
use std::path::Path;

/// Load the enriched color list
pub fn load_enriched(path: &Path) -> Result<Vec<EnrichedColor>> {
    iro_io::read_enriched(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Format an HLS triplet for display
pub fn format_hls(hls: &[f64; 3]) -> String {
    format!("h={:.4} l={:.4} s={:.4}", hls[0], hls[1], hls[2])
}
