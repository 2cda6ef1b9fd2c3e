//! Markdown index generation.
//!
//! One fragment per color, in list order, with nothing in between:
//!
//! ```text
//! [<img src="./images/<romanji>.svg">](<base_url>/<romanji>/)
//! ```
//!
//! Each card is generated right before its fragment is written, so a failure
//! part way leaves the cards and index written so far on disk.

use crate::error::{RenderError, RenderResult};
use crate::svg::{ImageGenerator, EXTENSION};
use iro_core::EnrichedColor;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Default page base for the external links.
pub const DEFAULT_BASE_URL: &str = "https://irocore.com";
/// Default card directory.
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Index settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Card directory, relative to the working directory.
    pub images_dir: PathBuf,
    /// Base URL of the per-color external pages.
    pub base_url: String,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl IndexOptions {
    /// `src` of the card image as referenced from the Markdown file.
    ///
    /// Relative directories get a `./` prefix and always use `/` separators.
    pub fn image_src(&self, romanji: &str) -> String {
        let dir = self.images_dir.to_string_lossy().replace('\\', "/");
        let dir = dir.trim_end_matches('/');
        let prefix = if dir.is_empty() || dir == "." {
            ".".to_string()
        } else if self.images_dir.is_absolute() || dir.starts_with("./") || dir.starts_with("../") {
            dir.to_string()
        } else {
            format!("./{}", dir)
        };
        format!("{}/{}.{}", prefix, romanji, EXTENSION)
    }

    /// External page for `romanji`.
    pub fn page_url(&self, romanji: &str) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), romanji)
    }
}

/// Markdown fragment for one color.
///
/// ```rust
/// use iro_render::{markdown_line, IndexOptions};
/// # use iro_core::EnrichedColor;
/// # let color = EnrichedColor {
/// #     romanji: "nadeshiko".into(), kanji: "撫子".into(), hex: "#DC9FB4".into(),
/// #     rgb: [220, 159, 180], hls: [0.94, 0.74, 0.47],
/// # };
///
/// assert_eq!(
///     markdown_line(&color, &IndexOptions::default()),
///     "[<img src=\"./images/nadeshiko.svg\">](https://irocore.com/nadeshiko/)",
/// );
/// ```
pub fn markdown_line(color: &EnrichedColor, opts: &IndexOptions) -> String {
    format!(
        "[<img src=\"{}\">]({})",
        opts.image_src(&color.romanji),
        opts.page_url(&color.romanji)
    )
}

/// Writes cards and index for an already loaded list.
///
/// Returns the number of colors written.
pub fn write_index(colors: &[EnrichedColor], markdown: &Path, opts: &IndexOptions) -> RenderResult<usize> {
    trace!(markdown = %markdown.display(), colors = colors.len(), "write_index");
    let generator = ImageGenerator::new(&opts.images_dir);
    generator.ensure_dir()?;

    let file = File::create(markdown).map_err(|e| RenderError::write(markdown, e))?;
    let mut out = BufWriter::new(file);
    for color in colors {
        generator.generate(color)?;
        out.write_all(markdown_line(color, opts).as_bytes())
            .map_err(|e| RenderError::write(markdown, e))?;
        debug!(romanji = %color.romanji, "Indexed");
    }
    out.flush().map_err(|e| RenderError::write(markdown, e))?;

    info!(markdown = %markdown.display(), count = colors.len(), "Wrote index");
    Ok(colors.len())
}

/// Reads the enriched list at `enriched`, then writes every card and the
/// Markdown index at `markdown`.
///
/// The enriched file is read in full before anything is written, so a
/// missing or malformed file leaves existing outputs untouched.
pub fn generate_index(enriched: &Path, markdown: &Path, opts: &IndexOptions) -> RenderResult<usize> {
    let colors = iro_io::read_enriched(enriched)?;
    write_index(&colors, markdown, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn color(romanji: &str) -> EnrichedColor {
        EnrichedColor {
            romanji: romanji.into(),
            kanji: "色".into(),
            hex: "#808080".into(),
            rgb: [128, 128, 128],
            hls: [0.0, 0.5019607843137255, 0.0],
        }
    }

    #[test]
    fn test_image_src_prefix() {
        let mut opts = IndexOptions::default();
        assert_eq!(opts.image_src("kuro"), "./images/kuro.svg");
        opts.images_dir = PathBuf::from("./images/");
        assert_eq!(opts.image_src("kuro"), "./images/kuro.svg");
        opts.images_dir = PathBuf::from("assets/cards");
        assert_eq!(opts.image_src("kuro"), "./assets/cards/kuro.svg");
        opts.images_dir = PathBuf::from(".");
        assert_eq!(opts.image_src("kuro"), "./kuro.svg");
    }

    #[test]
    fn test_page_url_trims_slash() {
        let opts = IndexOptions {
            base_url: "https://example.org/colors/".into(),
            ..IndexOptions::default()
        };
        assert_eq!(opts.page_url("kuro"), "https://example.org/colors/kuro/");
    }

    #[test]
    fn test_write_index_concatenates() {
        let dir = tempdir().unwrap();
        let opts = IndexOptions {
            images_dir: dir.path().join("images"),
            ..IndexOptions::default()
        };
        let md = dir.path().join("README.md");
        let colors = [color("nezumi"), color("hai")];

        assert_eq!(write_index(&colors, &md, &opts).unwrap(), 2);

        let text = std::fs::read_to_string(&md).unwrap();
        let expected = format!("{}{}", markdown_line(&colors[0], &opts), markdown_line(&colors[1], &opts));
        assert_eq!(text, expected);
        assert!(!text.contains('\n'));
        assert!(dir.path().join("images/nezumi.svg").exists());
        assert!(dir.path().join("images/hai.svg").exists());
    }

    #[test]
    fn test_generate_index_missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let md = dir.path().join("README.md");
        std::fs::write(&md, "keep me").unwrap();
        let opts = IndexOptions {
            images_dir: dir.path().join("images"),
            ..IndexOptions::default()
        };

        let err = generate_index(&dir.path().join("nippon_colors.json"), &md, &opts).unwrap_err();
        assert!(matches!(err, RenderError::Core(iro_core::Error::MissingFile { .. })));
        assert_eq!(std::fs::read_to_string(&md).unwrap(), "keep me");
        assert!(!dir.path().join("images").exists());
    }

    #[test]
    fn test_generate_index_malformed_input() {
        let dir = tempdir().unwrap();
        let json = dir.path().join("nippon_colors.json");
        std::fs::write(&json, "[{\"romanji\": 1}]").unwrap();
        let err = generate_index(&json, &dir.path().join("README.md"), &IndexOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::Core(iro_core::Error::MalformedJson { .. })));
    }
}
