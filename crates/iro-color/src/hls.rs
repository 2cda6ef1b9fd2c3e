//! RGB <-> HLS conversion.
//!
//! Same formulation as the classic `colorsys` module: hue, lightness and
//! saturation all normalized to `[0, 1]`, computed in `f64`. The arithmetic
//! follows the formula below step for step; results are compared bit-for-bit.
//!
//! # Formula
//!
//! ```text
//! max, min = max(r,g,b), min(r,g,b)
//! l = (max + min) / 2
//! if max == min: h = 0, s = 0
//! s = (max - min) / (max + min)        if l <= 0.5
//!   = (max - min) / (2 - max - min)    otherwise
//! h = ((bc - gc) | (2 + rc - bc) | (4 + gc - rc)) / 6 mod 1
//! ```

use iro_core::{Hls, Rgb8};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Converts unit RGB to HLS.
///
/// # Example
///
/// ```rust
/// use iro_color::rgb_to_hls;
///
/// let [h, l, s] = rgb_to_hls([1.0, 0.0, 0.0]);
/// assert_eq!((h, l, s), (0.0, 0.5, 1.0));
/// ```
pub fn rgb_to_hls(rgb: [f64; 3]) -> Hls {
    let [r, g, b] = rgb;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let sumc = maxc + minc;
    let rangec = maxc - minc;
    let l = sumc / 2.0;
    if minc == maxc {
        return [0.0, l, 0.0];
    }
    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        // not 2 - sumc, which rounds differently
        rangec / (2.0 - maxc - minc)
    };
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    [floor_mod1(h / 6.0), l, s]
}

/// Converts HLS back to unit RGB.
///
/// Inverse of [`rgb_to_hls`] up to floating point rounding.
pub fn hls_to_rgb(hls: Hls) -> [f64; 3] {
    let [h, l, s] = hls;
    if s == 0.0 {
        return [l, l, l];
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    [
        channel(m1, m2, h + ONE_THIRD),
        channel(m1, m2, h),
        channel(m1, m2, h - ONE_THIRD),
    ]
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = floor_mod1(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

/// Floored modulo by 1; result takes the sign of the divisor, so it is
/// always in `[0, 1)`.
#[inline]
fn floor_mod1(v: f64) -> f64 {
    let r = v.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if r >= 1.0 { 0.0 } else { r }
}

/// 8-bit RGB to unit RGB.
#[inline]
pub fn rgb8_to_unit(rgb: Rgb8) -> [f64; 3] {
    [
        f64::from(rgb[0]) / 255.0,
        f64::from(rgb[1]) / 255.0,
        f64::from(rgb[2]) / 255.0,
    ]
}

/// Unit RGB to 8-bit RGB, rounding to nearest and clamping.
#[inline]
pub fn unit_to_rgb8(rgb: [f64; 3]) -> Rgb8 {
    rgb.map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hls([1.0, 0.0, 0.0]), [0.0, 0.5, 1.0]);
        let [h, l, s] = rgb_to_hls([0.0, 1.0, 0.0]);
        assert_abs_diff_eq!(h, ONE_THIRD, epsilon = 1e-12);
        assert_eq!((l, s), (0.5, 1.0));
        let [h, _, _] = rgb_to_hls([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(h, TWO_THIRD, epsilon = 1e-12);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hls([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hls([1.0, 1.0, 1.0]), [0.0, 1.0, 0.0]);
        assert_eq!(rgb_to_hls([0.5, 0.5, 0.5]), [0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_negative_hue_wraps() {
        // magenta-ish red: r is max, b > g gives a negative raw hue
        let [h, _, _] = rgb_to_hls([1.0, 0.0, 0.5]);
        assert!(h > 0.9 && h < 1.0, "h={}", h);
    }

    #[test]
    fn test_light_saturation_branch() {
        // l > 0.5 uses the 2 - max - min denominator
        let [_, l, s] = rgb_to_hls([1.0, 0.5, 0.5]);
        assert_abs_diff_eq!(l, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roundtrip_all_grid() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(51) {
                    let rgb = [r, g, b];
                    let hls = rgb_to_hls(rgb8_to_unit(rgb));
                    for c in hls {
                        assert!((0.0..=1.0).contains(&c), "{:?} -> {:?}", rgb, hls);
                    }
                    assert_eq!(unit_to_rgb8(hls_to_rgb(hls)), rgb);
                }
            }
        }
    }

    #[test]
    fn test_unit_to_rgb8_clamps() {
        assert_eq!(unit_to_rgb8([-0.1, 0.5, 1.2]), [0, 128, 255]);
    }
}
