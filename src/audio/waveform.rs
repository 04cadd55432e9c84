//! Closed-form waveform generators.
//!
//! Every generator maps `(t, amplitude, frequency)` to one signed 16-bit
//! sample with no state carried between calls, so samples can be computed
//! in any order.

use std::f64::consts::PI;

/// Full-scale positive 16-bit value used to scale unit waveforms.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WaveformKind {
    /// Pure sinusoid.
    #[default]
    Sine,
    /// Rising ramp from -1 to +1 once per period.
    Sawtooth,
    /// Two-level wave derived from the sine phase.
    BipolarSquare,
    /// Symmetric ramp, -1 at the start of each period and +1 at mid-period.
    Triangle,
}

impl WaveformKind {
    /// All variants, in CLI listing order.
    pub const ALL: [WaveformKind; 4] = [
        WaveformKind::Sine,
        WaveformKind::Sawtooth,
        WaveformKind::BipolarSquare,
        WaveformKind::Triangle,
    ];

    /// Returns the name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Sawtooth => "sawtooth",
            WaveformKind::BipolarSquare => "bipolarsquare",
            WaveformKind::Triangle => "triangle",
        }
    }

    /// Parses a waveform name. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sine" => Some(WaveformKind::Sine),
            "sawtooth" => Some(WaveformKind::Sawtooth),
            "bipolarsquare" => Some(WaveformKind::BipolarSquare),
            "triangle" => Some(WaveformKind::Triangle),
            _ => None,
        }
    }

    /// Resolves a waveform name, substituting [`WaveformKind::Sine`] for
    /// anything unrecognized.
    ///
    /// The second element is `true` when the fallback was taken.
    pub fn resolve(s: &str) -> (Self, bool) {
        match Self::parse(s) {
            Some(kind) => (kind, false),
            None => (WaveformKind::Sine, true),
        }
    }

    /// Computes the sample at time `t` seconds.
    pub fn generate(&self, t: f64, amplitude: f64, frequency: f64) -> i16 {
        match self {
            WaveformKind::Sine => sine(t, amplitude, frequency),
            WaveformKind::Sawtooth => sawtooth(t, amplitude, frequency),
            WaveformKind::BipolarSquare => bipolar_square(t, amplitude, frequency),
            WaveformKind::Triangle => triangle(t, amplitude, frequency),
        }
    }
}

impl std::fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fractional part of `x`, always in `[0, 1)` for finite input.
#[inline]
pub fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Sine wave, rounded to the nearest integer.
pub fn sine(t: f64, amplitude: f64, frequency: f64) -> i16 {
    (amplitude * FULL_SCALE * (2.0 * PI * frequency * t).sin()).round() as i16
}

/// Sawtooth wave ramping from -1 to +1 over each period.
pub fn sawtooth(t: f64, amplitude: f64, frequency: f64) -> i16 {
    (amplitude * FULL_SCALE * (2.0 * frac(frequency * t) - 1.0)) as i16
}

/// Two-level wave: +1 when `sin(2*pi*f*t) % 1.0 >= 0.5`, otherwise -1.
///
/// Because the sine value already lies in `[-1, 1]`, the output is high only
/// while the sine sits in `[0.5, 1.0)`. It is not a 50% duty-cycle square
/// wave; existing output files depend on this exact shape.
pub fn bipolar_square(t: f64, amplitude: f64, frequency: f64) -> i16 {
    let value = (2.0 * PI * frequency * t).sin();
    let level = if value % 1.0 >= 0.5 { 1.0 } else { -1.0 };
    (amplitude * FULL_SCALE * level) as i16
}

/// Triangle wave in `[-1, 1]`.
pub fn triangle(t: f64, amplitude: f64, frequency: f64) -> i16 {
    (amplitude * FULL_SCALE * (1.0 - 4.0 * (frac(frequency * t) - 0.5).abs())) as i16
}
