//! Bucket classification.
//!
//! Checks run in a fixed order, so every color lands in exactly one bucket:
//!
//! ```text
//! lightness  < black_below  -> Black
//! lightness  > white_above  -> White
//! saturation < gray_below   -> Gray
//! otherwise                 -> Other
//! ```

use crate::error::{ColorError, ColorResult};
use iro_core::record::{LIGHTNESS, SATURATION};
use iro_core::{Bucket, Hls};

/// Classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Lightness strictly below this is black.
    pub black_below: f64,
    /// Lightness strictly above this is white.
    pub white_above: f64,
    /// Saturation strictly below this is gray.
    pub gray_below: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            black_below: 0.20,
            white_above: 0.80,
            gray_below: 0.25,
        }
    }
}

impl Thresholds {
    /// Checks every threshold is in `[0, 1]` and black sits below white.
    pub fn validate(&self) -> ColorResult<()> {
        for (name, v) in [
            ("black_below", self.black_below),
            ("white_above", self.white_above),
            ("gray_below", self.gray_below),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ColorError::InvalidThresholds(format!("{} = {} is outside [0, 1]", name, v)));
            }
        }
        if self.black_below > self.white_above {
            return Err(ColorError::InvalidThresholds(format!(
                "black_below ({}) is above white_above ({})",
                self.black_below, self.white_above
            )));
        }
        Ok(())
    }
}

/// Classifies an HLS triplet.
///
/// # Example
///
/// ```rust
/// use iro_color::{classify, Thresholds};
/// use iro_core::Bucket;
///
/// let t = Thresholds::default();
/// assert_eq!(classify(&[0.0, 0.1, 0.9], &t), Bucket::Black);
/// assert_eq!(classify(&[0.0, 0.5, 0.1], &t), Bucket::Gray);
/// assert_eq!(classify(&[0.0, 0.5, 0.9], &t), Bucket::Other);
/// ```
pub fn classify(hls: &Hls, t: &Thresholds) -> Bucket {
    let l = hls[LIGHTNESS];
    let s = hls[SATURATION];
    if l < t.black_below {
        Bucket::Black
    } else if l > t.white_above {
        Bucket::White
    } else if s < t.gray_below {
        Bucket::Gray
    } else {
        Bucket::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_exclusive() {
        let t = Thresholds::default();
        // exactly at a threshold falls through to the next check
        assert_eq!(classify(&[0.0, 0.20, 0.9], &t), Bucket::Other);
        assert_eq!(classify(&[0.0, 0.80, 0.9], &t), Bucket::Other);
        assert_eq!(classify(&[0.0, 0.5, 0.25], &t), Bucket::Other);
        assert_eq!(classify(&[0.0, 0.19999, 0.9], &t), Bucket::Black);
        assert_eq!(classify(&[0.0, 0.80001, 0.9], &t), Bucket::White);
    }

    #[test]
    fn test_lightness_checked_before_saturation() {
        let t = Thresholds::default();
        assert_eq!(classify(&[0.0, 0.0, 0.0], &t), Bucket::Black);
        assert_eq!(classify(&[0.0, 1.0, 0.0], &t), Bucket::White);
    }

    #[test]
    fn test_total_and_exclusive() {
        let t = Thresholds::default();
        let mut seen = [0usize; 4];
        for li in 0..=20 {
            for si in 0..=20 {
                let hls = [0.5, li as f64 / 20.0, si as f64 / 20.0];
                seen[classify(&hls, &t).output_rank()] += 1;
            }
        }
        assert_eq!(seen.iter().sum::<usize>(), 21 * 21);
        assert!(seen.iter().all(|&n| n > 0));
    }

    #[test]
    fn test_validate() {
        assert!(Thresholds::default().validate().is_ok());
        let bad = Thresholds { black_below: 0.9, white_above: 0.1, gray_below: 0.25 };
        assert!(bad.validate().is_err());
        let out = Thresholds { gray_below: 1.5, ..Thresholds::default() };
        assert!(out.validate().is_err());
    }
}
