//! Images command
//!
//! Regenerates cards without touching the Markdown index. Filters combine:
//! a color is written only if it passes every filter given.

use crate::config::Settings;
use crate::ImagesArgs;
use anyhow::{bail, Context, Result};
use iro_core::EnrichedColor;
use iro_render::ImageGenerator;
use tracing::{debug, info, trace};

pub fn run(args: ImagesArgs, mut settings: Settings, verbose: u8) -> Result<()> {
    if let Some(enriched) = &args.enriched {
        settings.enriched = enriched.clone();
    }
    if let Some(dir) = &args.images_dir {
        settings.images_dir = dir.clone();
    }
    trace!(enriched = %settings.enriched.display(), images_dir = %settings.images_dir.display(), "images::run");

    let colors = super::load_enriched(&settings.enriched)?;
    if let Some(i) = args.index {
        if i >= colors.len() {
            bail!("index {} out of range ({} colors)", i, colors.len());
        }
    }

    let selected = select(&colors, &args);
    debug!(selected = selected.len(), total = colors.len(), "Selected colors");
    if verbose > 0 {
        println!("Generating {} of {} cards into {}", selected.len(), colors.len(), settings.images_dir.display());
    }

    let generator = ImageGenerator::new(&settings.images_dir);
    let count = generator
        .generate_all(selected.iter().copied())
        .with_context(|| format!("Failed to write cards into {}", generator.dir().display()))?;

    info!(count, "Cards written");
    if verbose > 0 {
        println!("Done.");
    }
    Ok(())
}

/// Colors passing every filter in `args`, in list order.
fn select<'a>(colors: &'a [EnrichedColor], args: &ImagesArgs) -> Vec<&'a EnrichedColor> {
    colors
        .iter()
        .enumerate()
        .filter(|(i, _)| args.index.is_none_or(|want| want == *i))
        .filter(|(_, c)| args.min_len.is_none_or(|n| c.romanji_len() > n))
        .filter(|(_, c)| args.only.is_empty() || args.only.iter().any(|o| o.eq_ignore_ascii_case(&c.romanji)))
        .map(|(_, c)| c)
        .collect()
}
