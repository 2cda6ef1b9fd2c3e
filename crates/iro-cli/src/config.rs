//! Run settings.
//!
//! Layered: built-in defaults, then an optional YAML file, then command-line
//! flags. Every key in the file is optional.
//!
//! ```yaml
//! input: data/colors.json
//! enriched: nippon_colors.json
//! markdown: README.md
//! images_dir: images
//! base_url: https://irocore.com
//! black_below: 0.2
//! white_above: 0.8
//! gray_below: 0.25
//! strict_marker: false
//! ```

use anyhow::{bail, Context, Result};
use iro_color::{Enricher, HexOptions, Thresholds};
use iro_render::{IndexOptions, DEFAULT_BASE_URL, DEFAULT_IMAGES_DIR};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{RenderArgs, ThresholdArgs};

/// Default raw color list.
pub const DEFAULT_INPUT: &str = "colors.json";
/// Default enriched output.
pub const DEFAULT_ENRICHED: &str = "nippon_colors.json";
/// Default Markdown output.
pub const DEFAULT_MARKDOWN: &str = "README.md";

/// YAML config file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub enriched: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
    pub images_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub black_below: Option<f64>,
    pub white_above: Option<f64>,
    pub gray_below: Option<f64>,
    pub strict_marker: Option<bool>,
}

impl FileConfig {
    /// Loads a config file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses config from a YAML string. An empty document is an empty config.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub enriched: PathBuf,
    pub markdown: PathBuf,
    pub images_dir: PathBuf,
    pub base_url: String,
    pub thresholds: Thresholds,
    pub hex: HexOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            enriched: PathBuf::from(DEFAULT_ENRICHED),
            markdown: PathBuf::from(DEFAULT_MARKDOWN),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            thresholds: Thresholds::default(),
            hex: HexOptions::default(),
        }
    }
}

impl Settings {
    /// Defaults, with `config` applied on top when given.
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = config {
            settings.apply_file(FileConfig::from_file(path)?);
            debug!(config = %path.display(), "Loaded config");
        }
        Ok(settings)
    }

    /// Overrides with any values present in `file`.
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(v) = file.input {
            self.input = v;
        }
        if let Some(v) = file.enriched {
            self.enriched = v;
        }
        if let Some(v) = file.markdown {
            self.markdown = v;
        }
        if let Some(v) = file.images_dir {
            self.images_dir = v;
        }
        if let Some(v) = file.base_url {
            self.base_url = v;
        }
        if let Some(v) = file.black_below {
            self.thresholds.black_below = v;
        }
        if let Some(v) = file.white_above {
            self.thresholds.white_above = v;
        }
        if let Some(v) = file.gray_below {
            self.thresholds.gray_below = v;
        }
        if let Some(v) = file.strict_marker {
            self.hex.strict_marker = v;
        }
    }

    /// Overrides with threshold flags.
    pub(crate) fn apply_thresholds(&mut self, args: &ThresholdArgs) {
        if let Some(v) = args.black_below {
            self.thresholds.black_below = v;
        }
        if let Some(v) = args.white_above {
            self.thresholds.white_above = v;
        }
        if let Some(v) = args.gray_below {
            self.thresholds.gray_below = v;
        }
        if args.strict_marker {
            self.hex.strict_marker = true;
        }
    }

    /// Overrides with card/index flags.
    pub(crate) fn apply_render(&mut self, args: &RenderArgs) {
        if let Some(v) = &args.images_dir {
            self.images_dir = v.clone();
        }
        if let Some(v) = &args.base_url {
            self.base_url = v.clone();
        }
    }

    /// Enricher for these settings.
    pub fn enricher(&self) -> Enricher {
        Enricher::new(self.thresholds, self.hex)
    }

    /// Index options for these settings.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            images_dir: self.images_dir.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.input, PathBuf::from("colors.json"));
        assert_eq!(s.enriched, PathBuf::from("nippon_colors.json"));
        assert_eq!(s.markdown, PathBuf::from("README.md"));
        assert_eq!(s.images_dir, PathBuf::from("images"));
        assert_eq!(s.base_url, "https://irocore.com");
        assert_eq!(s.thresholds, Thresholds::default());
        assert!(!s.hex.strict_marker);
    }

    #[test]
    fn test_partial_yaml() {
        let file = FileConfig::from_yaml_str("base_url: https://example.org\ngray_below: 0.3\n").unwrap();
        let mut s = Settings::default();
        s.apply_file(file);
        assert_eq!(s.base_url, "https://example.org");
        assert_eq!(s.thresholds.gray_below, 0.3);
        assert_eq!(s.thresholds.black_below, 0.20);
        assert_eq!(s.markdown, PathBuf::from("README.md"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::from_yaml_str("gray_belwo: 0.3\n").is_err());
    }

    #[test]
    fn test_empty_yaml() {
        let file = FileConfig::from_yaml_str("\n").unwrap();
        let mut s = Settings::default();
        s.apply_file(file);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut s = Settings::default();
        s.apply_file(FileConfig::from_yaml_str("black_below: 0.1\nimages_dir: cards\n").unwrap());
        s.apply_thresholds(&ThresholdArgs {
            black_below: Some(0.15),
            strict_marker: true,
            ..ThresholdArgs::default()
        });
        s.apply_render(&RenderArgs {
            images_dir: Some(PathBuf::from("out")),
            base_url: None,
        });
        assert_eq!(s.thresholds.black_below, 0.15);
        assert!(s.hex.strict_marker);
        assert_eq!(s.images_dir, PathBuf::from("out"));
        assert_eq!(s.base_url, "https://irocore.com");
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("iro.yaml"))).is_err());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("iro.yaml");
        std::fs::write(&path, "markdown: docs/index.md\nstrict_marker: true\n").unwrap();
        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.markdown, PathBuf::from("docs/index.md"));
        assert!(s.hex.strict_marker);
    }
}
