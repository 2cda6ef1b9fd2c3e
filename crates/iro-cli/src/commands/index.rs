//! Index command
//!
//! Writes every card and the Markdown index from the enriched JSON.

use crate::config::Settings;
use crate::IndexArgs;
use anyhow::{Context, Result};
use tracing::{info, trace};

pub fn run(args: IndexArgs, mut settings: Settings, verbose: u8) -> Result<()> {
    if let Some(enriched) = args.enriched {
        settings.enriched = enriched;
    }
    if let Some(markdown) = args.markdown {
        settings.markdown = markdown;
    }
    settings.apply_render(&args.render);

    index(&settings, verbose)
}

/// Runs the index stage with resolved settings.
pub fn index(settings: &Settings, verbose: u8) -> Result<()> {
    trace!(enriched = %settings.enriched.display(), markdown = %settings.markdown.display(), "index");

    let colors = super::load_enriched(&settings.enriched)?;
    if verbose > 0 {
        println!(
            "Indexing {} colors -> {} (cards in {})",
            colors.len(),
            settings.markdown.display(),
            settings.images_dir.display()
        );
    }

    let count = iro_render::write_index(&colors, &settings.markdown, &settings.index_options())
        .with_context(|| format!("Failed to write index: {}", settings.markdown.display()))?;

    info!(count, markdown = %settings.markdown.display(), "Index complete");
    if verbose > 0 {
        println!("Done.");
    }
    Ok(())
}
