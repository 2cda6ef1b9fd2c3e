//! Hex color parsing.
//!
//! Accepts `RRGGBB` or a marker followed by `RRGGBB` (usually `#RRGGBB`).
//! When the string is longer than six characters its first character is
//! dropped; whether that character must be `#` is controlled by
//! [`HexOptions::strict_marker`]. Anything after the sixth remaining digit is
//! ignored.

use crate::error::{ColorError, ColorResult};
use crate::hls::{rgb8_to_unit, rgb_to_hls};
use iro_core::{Hls, Rgb8};

/// Parsing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexOptions {
    /// Require the dropped leading character to be `#`.
    pub strict_marker: bool,
}

impl HexOptions {
    /// Lenient parsing: any leading character is dropped.
    pub const LENIENT: Self = Self { strict_marker: false };
    /// Strict parsing: only `#` may be dropped.
    pub const STRICT: Self = Self { strict_marker: true };
}

/// Parses a hex color into 8-bit RGB.
///
/// # Example
///
/// ```rust
/// use iro_color::{parse_hex, HexOptions};
///
/// assert_eq!(parse_hex("#8F77B5", HexOptions::LENIENT).unwrap(), [143, 119, 181]);
/// assert_eq!(parse_hex("8f77b5", HexOptions::STRICT).unwrap(), [143, 119, 181]);
/// assert!(parse_hex("@8f77b5", HexOptions::STRICT).is_err());
/// ```
pub fn parse_hex(hex: &str, opts: HexOptions) -> ColorResult<Rgb8> {
    let mut chars = hex.chars();
    let digits = if hex.chars().count() > 6 {
        let marker = chars.next().unwrap_or_default();
        if opts.strict_marker && marker != '#' {
            return Err(ColorError::malformed(hex, format!("unexpected leading '{}'", marker)));
        }
        chars.as_str()
    } else {
        hex
    };

    let bytes = digits.as_bytes();
    if bytes.len() < 6 {
        return Err(ColorError::malformed(hex, "fewer than six hex digits"));
    }

    let mut rgb = [0u8; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        let pair = &bytes[i * 2..i * 2 + 2];
        *c = decode_pair(pair)
            .ok_or_else(|| ColorError::malformed(hex, format!("'{}' is not a hex pair", String::from_utf8_lossy(pair))))?;
    }
    Ok(rgb)
}

fn decode_pair(pair: &[u8]) -> Option<u8> {
    let hi = (pair[0] as char).to_digit(16)?;
    let lo = (pair[1] as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

/// Parses a hex color (lenient marker handling) and derives its HLS.
///
/// # Example
///
/// ```rust
/// use iro_color::hex_to_rgb_hls;
///
/// let (rgb, hls) = hex_to_rgb_hls("#000000").unwrap();
/// assert_eq!(rgb, [0, 0, 0]);
/// assert_eq!(hls, [0.0, 0.0, 0.0]);
/// ```
pub fn hex_to_rgb_hls(hex: &str) -> ColorResult<(Rgb8, Hls)> {
    hex_to_rgb_hls_with(hex, HexOptions::default())
}

/// [`hex_to_rgb_hls`] with explicit options.
pub fn hex_to_rgb_hls_with(hex: &str, opts: HexOptions) -> ColorResult<(Rgb8, Hls)> {
    let rgb = parse_hex(hex, opts)?;
    Ok((rgb, rgb_to_hls(rgb8_to_unit(rgb))))
}
