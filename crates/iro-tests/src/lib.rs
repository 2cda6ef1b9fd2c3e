//! Integration tests for iro crates.
//!
//! End-to-end runs of the enrich -> index pipeline over a temporary
//! directory, checking the files the way a site build would consume them.

/// Small raw dataset in the source format, deliberately out of order.
pub const SAMPLE_COLORS: &str = r##"[
    {"name": "墨", "value": "#1C1C1C", "romanized": "SUMI"},
    {"name": "撫子", "value": "#DC9FB4", "romanized": "NADESHIKO"},
    {"name": "白練", "value": "#FCFAF2", "romanized": "SHIRONERI"},
    {"name": "利休鼠", "value": "#707C74", "romanized": "RIKYUNEZUMI"},
    {"name": "紅", "value": "#CB1B45", "romanized": "KURENAI"},
    {"name": "黒", "value": "#080808", "romanized": "KURO"},
    {"name": "山吹", "value": "#FFB11B", "romanized": "YAMABUKI"},
    {"name": "胡粉", "value": "#FFFFFB", "romanized": "GOFUN"},
    {"name": "若竹", "value": "#5DAC81", "romanized": "WAKATAKE"},
    {"name": "鈍", "value": "#656765", "romanized": "NIBI"},
    {"name": "紫", "value": "#8F77B5", "romanized": "MURASAKI"}
]"##;

/// Expected enriched order of [`SAMPLE_COLORS`].
pub const SAMPLE_ORDER: [&str; 11] = [
    // other, by hue
    "yamabuki", "wakatake", "murasaki", "nadeshiko", "kurenai",
    // white, by lightness
    "shironeri", "gofun",
    // gray, by saturation
    "nibi", "rikyunezumi",
    // black, by lightness
    "kuro", "sumi",
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use iro_color::{classify, hex_to_rgb_hls, Enricher, Thresholds};
    use iro_core::{Bucket, EnrichedColor};
    use iro_render::{generate_index, markdown_line, render_card, IndexOptions};
    use std::path::Path;
    use tempfile::tempdir;

    /// Runs enrich on `input` and writes `output`.
    fn enrich_file(input: &Path, output: &Path) -> Vec<EnrichedColor> {
        let records = iro_io::read_records(input).expect("Failed to read raw colors");
        let colors = Enricher::default().convert(&records).expect("Failed to enrich");
        iro_io::write_enriched(output, &colors).expect("Failed to write enriched");
        colors
    }

    fn names(colors: &[EnrichedColor]) -> Vec<&str> {
        colors.iter().map(|c| c.romanji.as_str()).collect()
    }

    #[test]
    fn test_enrich_orders_by_bucket() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let output = dir.path().join("nippon_colors.json");
        std::fs::write(&input, SAMPLE_COLORS).unwrap();

        let colors = enrich_file(&input, &output);
        assert_eq!(names(&colors), SAMPLE_ORDER);

        // buckets appear as contiguous runs in output order
        let t = Thresholds::default();
        let ranks: Vec<usize> = colors.iter().map(|c| classify(&c.hls, &t).output_rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "ranks: {:?}", ranks);
        assert_eq!(classify(&colors[0].hls, &t), Bucket::Other);
        assert_eq!(classify(&colors[10].hls, &t), Bucket::Black);
    }

    #[test]
    fn test_enriched_file_rederives_from_hex() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let output = dir.path().join("nippon_colors.json");
        std::fs::write(&input, SAMPLE_COLORS).unwrap();
        enrich_file(&input, &output);

        let loaded = iro_io::read_enriched(&output).unwrap();
        assert_eq!(loaded.len(), 11);
        for c in &loaded {
            let (rgb, hls) = hex_to_rgb_hls(&c.hex).unwrap();
            assert_eq!(rgb, c.rgb, "{}", c.romanji);
            for i in 0..3 {
                assert_abs_diff_eq!(hls[i], c.hls[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_enriched_file_format() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let output = dir.path().join("nippon_colors.json");
        std::fs::write(&input, SAMPLE_COLORS).unwrap();
        enrich_file(&input, &output);

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("[\n    {\n        \"romanji\": \"yamabuki\",\n        \"kanji\": \"山吹\",\n        \"hex\": \"#FFB11B\",\n"));
        assert!(!text.contains("\\u"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let first = value[0].as_object().unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(value[0]["rgb"], serde_json::json!([255, 177, 27]));
    }

    #[test]
    fn test_full_pipeline() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let enriched = dir.path().join("nippon_colors.json");
        let markdown = dir.path().join("README.md");
        std::fs::write(&input, SAMPLE_COLORS).unwrap();

        let colors = enrich_file(&input, &enriched);
        let opts = IndexOptions {
            images_dir: dir.path().join("images"),
            ..IndexOptions::default()
        };
        let count = generate_index(&enriched, &markdown, &opts).unwrap();
        assert_eq!(count, 11);

        let md = std::fs::read_to_string(&markdown).unwrap();
        let expected: String = colors.iter().map(|c| markdown_line(c, &opts)).collect();
        assert_eq!(md, expected);
        assert!(md.contains("](https://irocore.com/yamabuki/)[<img src="));

        for c in &colors {
            let path = dir.path().join("images").join(format!("{}.svg", c.romanji));
            let svg = std::fs::read_to_string(&path).unwrap();
            assert_eq!(svg, render_card(c).unwrap());
            assert!(svg.contains(&format!("fill=\"rgb({},{},{})\"", c.rgb[0], c.rgb[1], c.rgb[2])));
        }

        // three kanji shrink the vertical label
        let rikyu = std::fs::read_to_string(dir.path().join("images/rikyunezumi.svg")).unwrap();
        assert!(rikyu.contains("font-family: osaka, sans-serif;font-size: 40px;writing-mode: tb\">利休鼠</text>"));
    }

    #[test]
    fn test_default_markdown_links() {
        let colors: Vec<EnrichedColor> = serde_json::from_str(
            r##"[{"romanji": "sumi", "kanji": "墨", "hex": "#1C1C1C", "rgb": [28, 28, 28], "hls": [0.0, 0.10980392156862745, 0.0]}]"##,
        )
        .unwrap();
        assert_eq!(
            markdown_line(&colors[0], &IndexOptions::default()),
            "[<img src=\"./images/sumi.svg\">](https://irocore.com/sumi/)"
        );
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let enriched = dir.path().join("nippon_colors.json");
        let markdown = dir.path().join("README.md");
        std::fs::write(&input, SAMPLE_COLORS).unwrap();
        let opts = IndexOptions {
            images_dir: dir.path().join("images"),
            ..IndexOptions::default()
        };

        enrich_file(&input, &enriched);
        generate_index(&enriched, &markdown, &opts).unwrap();
        let first_json = std::fs::read(&enriched).unwrap();
        let first_md = std::fs::read(&markdown).unwrap();
        let first_svg = std::fs::read(dir.path().join("images/murasaki.svg")).unwrap();

        enrich_file(&input, &enriched);
        generate_index(&enriched, &markdown, &opts).unwrap();
        assert_eq!(std::fs::read(&enriched).unwrap(), first_json);
        assert_eq!(std::fs::read(&markdown).unwrap(), first_md);
        assert_eq!(std::fs::read(dir.path().join("images/murasaki.svg")).unwrap(), first_svg);
    }

    #[test]
    fn test_malformed_record_aborts_before_write() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("colors.json");
        let output = dir.path().join("nippon_colors.json");
        std::fs::write(
            &input,
            r##"[{"name": "紫", "value": "#8F77B5", "romanized": "MURASAKI"},
                {"name": "謎", "value": "#12345G", "romanized": "NAZO"}]"##,
        )
        .unwrap();

        let records = iro_io::read_records(&input).unwrap();
        let err = Enricher::default().convert(&records).unwrap_err();
        assert!(err.to_string().contains("NAZO"));
        assert!(!output.exists());
    }

    #[test]
    fn test_index_without_enriched_file() {
        let dir = tempdir().unwrap();
        let err = generate_index(
            &dir.path().join("nippon_colors.json"),
            &dir.path().join("README.md"),
            &IndexOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("nippon_colors.json"));
        assert!(!dir.path().join("README.md").exists());
    }
}
