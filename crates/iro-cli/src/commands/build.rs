//! Build command: enrich, then index.

use crate::config::Settings;
use crate::BuildArgs;
use anyhow::Result;
use tracing::info;

pub fn run(args: BuildArgs, mut settings: Settings, verbose: u8) -> Result<()> {
    if let Some(input) = args.input {
        settings.input = input;
    }
    if let Some(enriched) = args.enriched {
        settings.enriched = enriched;
    }
    if let Some(markdown) = args.markdown {
        settings.markdown = markdown;
    }
    settings.apply_thresholds(&args.thresholds);
    settings.apply_render(&args.render);

    super::enrich::enrich(&settings, verbose)?;
    // the index stage re-reads the file just written
    super::index::index(&settings, verbose)?;

    info!("Build complete");
    Ok(())
}
