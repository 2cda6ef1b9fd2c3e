//! Enrich command
//!
//! Reads the raw list, derives RGB/HLS, orders by bucket and writes the
//! enriched JSON.

use crate::config::Settings;
use crate::EnrichArgs;
use anyhow::{Context, Result};
use iro_core::EnrichedColor;
use std::path::Path;
use tracing::{info, trace};

pub fn run(args: EnrichArgs, mut settings: Settings, verbose: u8) -> Result<()> {
    if let Some(input) = args.input {
        settings.input = input;
    }
    if let Some(output) = args.output {
        settings.enriched = output;
    }
    settings.apply_thresholds(&args.thresholds);

    enrich(&settings, verbose)?;
    Ok(())
}

/// Runs the enrich stage with resolved settings.
pub fn enrich(settings: &Settings, verbose: u8) -> Result<Vec<EnrichedColor>> {
    trace!(input = %settings.input.display(), output = %settings.enriched.display(), "enrich");

    let records = iro_io::read_records(&settings.input)
        .with_context(|| format!("Failed to load: {}", settings.input.display()))?;

    if verbose > 0 {
        println!("Enriching {} colors from {}", records.len(), settings.input.display());
    }

    let colors = settings
        .enricher()
        .convert(&records)
        .with_context(|| format!("Failed to enrich: {}", settings.input.display()))?;

    write(&settings.enriched, &colors)?;

    info!(count = colors.len(), output = %settings.enriched.display(), "Enriched colors");
    if verbose > 0 {
        println!("Wrote {}", settings.enriched.display());
    }
    Ok(colors)
}

fn write(path: &Path, colors: &[EnrichedColor]) -> Result<()> {
    iro_io::write_enriched(path, colors).with_context(|| format!("Failed to save: {}", path.display()))
}
