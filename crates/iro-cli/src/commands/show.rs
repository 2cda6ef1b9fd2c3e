//! Show command: inspect one hex value.

use crate::config::Settings;
use crate::ShowArgs;
use anyhow::Result;
use iro_color::{classify, hex_to_rgb_hls_with};

pub fn run(args: ShowArgs, mut settings: Settings) -> Result<()> {
    settings.apply_thresholds(&args.thresholds);
    settings.thresholds.validate()?;

    let (rgb, hls) = hex_to_rgb_hls_with(&args.hex, settings.hex)?;
    let bucket = classify(&hls, &settings.thresholds);

    println!("{}", args.hex);
    println!("  RGB:    {}, {}, {}", rgb[0], rgb[1], rgb[2]);
    println!("  HLS:    {}", super::format_hls(&hls));
    println!("  Bucket: {}", bucket);
    Ok(())
}
