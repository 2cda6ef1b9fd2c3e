//! Color record types.
//!
//! Raw records come straight from the source dataset. Enriched records add the
//! derived RGB and HLS values and are what every downstream stage consumes.

use serde::{Deserialize, Serialize};

/// 8-bit RGB triplet, each component in `[0, 255]`.
pub type Rgb8 = [u8; 3];

/// Hue, lightness, saturation triplet, each component in `[0, 1]`.
pub type Hls = [f64; 3];

/// Index of hue in an [`Hls`] triplet.
pub const HUE: usize = 0;
/// Index of lightness in an [`Hls`] triplet.
pub const LIGHTNESS: usize = 1;
/// Index of saturation in an [`Hls`] triplet.
pub const SATURATION: usize = 2;

/// Raw color entry as found in the source dataset.
///
/// ```rust
/// use iro_core::ColorRecord;
///
/// let rec: ColorRecord = serde_json::from_str(
///     r##"{"name": "紫", "value": "#8F77B5", "romanized": "MURASAKI"}"##,
/// ).unwrap();
/// assert_eq!(rec.romanized, "MURASAKI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    /// Kanji name.
    pub name: String,
    /// Hex color, 6 characters plus an optional leading marker.
    pub value: String,
    /// Romanized name, any case.
    pub romanized: String,
}

impl ColorRecord {
    /// Creates a record from its three fields.
    pub fn new(name: impl Into<String>, value: impl Into<String>, romanized: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            romanized: romanized.into(),
        }
    }
}

/// Color entry augmented with derived values.
///
/// Field order here is the key order of the persisted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedColor {
    /// Lowercased romanized name. Also the image file stem.
    pub romanji: String,
    /// Kanji name, passed through unchanged.
    pub kanji: String,
    /// Hex string exactly as it appeared in the input.
    pub hex: String,
    /// 8-bit RGB derived from `hex`.
    pub rgb: Rgb8,
    /// HLS derived from `rgb`.
    pub hls: Hls,
}

impl EnrichedColor {
    /// Kanji length in characters.
    pub fn kanji_len(&self) -> usize {
        self.kanji.chars().count()
    }

    /// Romanji length in characters.
    pub fn romanji_len(&self) -> usize {
        self.romanji.chars().count()
    }

    /// CSS-style `rgb(r,g,b)` string.
    pub fn css_rgb(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgb({},{},{})", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> EnrichedColor {
        EnrichedColor {
            romanji: "nadeshiko".into(),
            kanji: "撫子".into(),
            hex: "#DC9FB4".into(),
            rgb: [220, 159, 180],
            hls: [0.9426229508196722, 0.7431372549019608, 0.4656488549618321],
        }
    }

    #[test]
    fn test_accessors() {
        let c = sample();
        assert_relative_eq!(c.hls[HUE], 0.9426229508196722);
        assert_relative_eq!(c.hls[LIGHTNESS], 0.7431372549019608);
        assert_relative_eq!(c.hls[SATURATION], 0.4656488549618321);
        assert_eq!(c.kanji_len(), 2);
        assert_eq!(c.romanji_len(), 9);
        assert_eq!(c.css_rgb(), "rgb(220,159,180)");
    }

    #[test]
    fn test_key_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let romanji = json.find("\"romanji\"").unwrap();
        let kanji = json.find("\"kanji\"").unwrap();
        let hex = json.find("\"hex\"").unwrap();
        let rgb = json.find("\"rgb\"").unwrap();
        let hls = json.find("\"hls\"").unwrap();
        assert!(romanji < kanji && kanji < hex && hex < rgb && rgb < hls);
    }

    #[test]
    fn test_raw_record_rejects_missing_field() {
        let res: Result<ColorRecord, _> = serde_json::from_str(r##"{"name": "x", "value": "#000000"}"##);
        assert!(res.is_err());
    }
}
