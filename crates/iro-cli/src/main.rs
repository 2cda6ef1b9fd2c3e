//! iro - Japanese traditional color asset generator
//!
//! Raw color list -> enriched JSON -> SVG cards + Markdown index.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::Settings;

#[derive(Parser)]
#[command(name = "iro")]
#[command(author, version, about = "Japanese traditional color asset generator")]
#[command(long_about = "
Turns a list of named colors into an enriched, sorted JSON file, one SVG card
per color and a Markdown index linking them.

Examples:
  iro build                                 # colors.json -> nippon_colors.json -> README.md + images/
  iro enrich -i colors.json -o nippon_colors.json
  iro index --base-url https://irocore.com
  iro images --min-len 11                   # only regenerate cards with long names
  iro images --only nadeshiko --only sumi
  iro show '#8F77B5'
  iro --config iro.yaml build
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more: -v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// YAML config file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich and sort the raw color list
    #[command(visible_alias = "e")]
    Enrich(EnrichArgs),

    /// Generate every card and the Markdown index
    #[command(visible_alias = "x")]
    Index(IndexArgs),

    /// Regenerate cards only, optionally a subset
    Images(ImagesArgs),

    /// Enrich, then index
    #[command(visible_alias = "b")]
    Build(BuildArgs),

    /// Print RGB/HLS/bucket for a hex color
    Show(ShowArgs),
}

/// Classification and parsing overrides.
#[derive(Args, Default)]
struct ThresholdArgs {
    /// Lightness below this is black
    #[arg(long)]
    black_below: Option<f64>,

    /// Lightness above this is white
    #[arg(long)]
    white_above: Option<f64>,

    /// Saturation below this is gray
    #[arg(long)]
    gray_below: Option<f64>,

    /// Only accept '#' as the leading marker of 7+ character hex values
    #[arg(long)]
    strict_marker: bool,
}

/// Card and index output overrides.
#[derive(Args, Default)]
struct RenderArgs {
    /// Card directory
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Base URL of the external color pages
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Args)]
struct EnrichArgs {
    /// Raw color list
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enriched output
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    thresholds: ThresholdArgs,
}

#[derive(Args)]
struct IndexArgs {
    /// Enriched color list
    #[arg(short, long)]
    enriched: Option<PathBuf>,

    /// Markdown output
    #[arg(short, long)]
    markdown: Option<PathBuf>,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct ImagesArgs {
    /// Enriched color list
    #[arg(short, long)]
    enriched: Option<PathBuf>,

    /// Card directory
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Only colors whose romanji is longer than this
    #[arg(long)]
    min_len: Option<usize>,

    /// Only these romanji (repeatable)
    #[arg(long)]
    only: Vec<String>,

    /// Only the color at this list position (0-based)
    #[arg(long)]
    index: Option<usize>,
}

#[derive(Args)]
struct BuildArgs {
    /// Raw color list
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Enriched output
    #[arg(short, long)]
    enriched: Option<PathBuf>,

    /// Markdown output
    #[arg(short, long)]
    markdown: Option<PathBuf>,

    #[command(flatten)]
    thresholds: ThresholdArgs,

    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Args)]
struct ShowArgs {
    /// Hex color, e.g. '#8F77B5'
    hex: String,

    #[command(flatten)]
    thresholds: ThresholdArgs,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Enrich(args) => commands::enrich::run(args, settings, cli.verbose),
        Commands::Index(args) => commands::index::run(args, settings, cli.verbose),
        Commands::Images(args) => commands::images::run(args, settings, cli.verbose),
        Commands::Build(args) => commands::build::run(args, settings, cli.verbose),
        Commands::Show(args) => commands::show::run(args, settings),
    }
}
