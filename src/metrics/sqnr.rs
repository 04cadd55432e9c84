//! Theoretical signal-to-quantization-noise ratio.
//!
//! Uses the per-bit approximation `6.02 dB * bits` without the usual
//! +1.76 dB sine-wave term. Only the configured bit depth matters; the
//! generated audio is never inspected.

use std::io::{self, Write};

/// Decibels of SQNR gained per bit of resolution.
pub const DB_PER_BIT: f64 = 6.02;

/// Number of fractional digits in the metrics file.
const FRACTION_DIGITS: usize = 15;

/// Estimates SQNR in dB for the given bit depth.
pub fn estimate(bit_depth: u32) -> f64 {
    DB_PER_BIT * f64::from(bit_depth)
}

/// Formats an SQNR value with exactly 15 digits after the decimal point.
pub fn format_sqnr(value: f64) -> String {
    format!("{:.*}", FRACTION_DIGITS, value)
}

/// Writes the SQNR estimate for `bit_depth`, without a trailing newline.
///
/// Returns the estimated value.
pub fn write_sqnr<W: Write>(writer: &mut W, bit_depth: u32) -> io::Result<f64> {
    let value = estimate(bit_depth);
    writer.write_all(format_sqnr(value).as_bytes())?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction_len(s: &str) -> usize {
        s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
    }

    #[test]
    fn estimate_scales_per_bit() {
        assert!((estimate(16) - 96.32).abs() < 1e-12);
        assert!((estimate(8) - 48.16).abs() < 1e-12);
        assert_eq!(estimate(0), 0.0);
    }

    #[test]
    fn format_has_fifteen_fraction_digits() {
        for bits in [1, 8, 16, 24, 32] {
            let text = format_sqnr(estimate(bits));
            assert_eq!(fraction_len(&text), 15, "{}", text);
            let parsed: f64 = text.parse().unwrap();
            assert!((parsed - estimate(bits)).abs() < 1e-12);
        }
        assert_eq!(format_sqnr(12.5), "12.500000000000000");
    }

    #[test]
    fn write_has_no_trailing_newline() {
        let mut out = Vec::new();
        let value = write_sqnr(&mut out, 16).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.ends_with('\n'));
        assert!(text.starts_with("96.3"));
        assert_eq!(text, format_sqnr(value));
    }
}
