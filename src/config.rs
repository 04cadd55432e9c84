//! Generation configuration.
//!
//! Holds the parameters of a single synthesis run. A config is built once
//! from command-line input and never modified afterwards.

use crate::audio::WaveformKind;
use crate::error::{Result, WavegenError};

/// Largest sample count whose data chunk still fits the 32-bit RIFF size field.
pub const MAX_SAMPLES: u64 = (u32::MAX as u64 - 36) / 2;

/// Parameters for one waveform generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Bit depth reported in the SQNR estimate.
    /// Samples are always encoded as 16-bit regardless of this value.
    pub bit_depth: u32,

    /// Waveform shape to synthesize.
    pub waveform: WaveformKind,

    /// Waveform frequency in Hz.
    pub frequency: f64,

    /// Linear amplitude multiplier, nominally in [0.0, 1.0].
    pub amplitude: f64,

    /// Duration in whole seconds.
    pub duration: u32,
}

impl GenerationConfig {
    /// Total number of samples on the timeline.
    pub fn num_samples(&self) -> u64 {
        u64::from(self.sample_rate) * u64::from(self.duration)
    }

    /// Sample count as stored in the WAV header.
    ///
    /// Fails when the data chunk would overflow the header's 32-bit size fields.
    pub fn header_sample_count(&self) -> Result<u32> {
        let total = self.num_samples();
        if total > MAX_SAMPLES {
            return Err(WavegenError::too_many_samples(self.sample_rate, self.duration));
        }
        Ok(total as u32)
    }

    /// Time in seconds of sample `index`.
    #[inline]
    pub fn time_at(&self, index: u64) -> f64 {
        index as f64 / f64::from(self.sample_rate)
    }

    /// Non-fatal advisories about values outside their nominal range.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(0.0..=1.0).contains(&self.amplitude) {
            warnings.push(format!(
                "amplitude {} is outside [0.0, 1.0]; samples will saturate at the 16-bit limits",
                self.amplitude
            ));
        }

        let nyquist = f64::from(self.sample_rate) / 2.0;
        if self.frequency > nyquist {
            warnings.push(format!(
                "frequency {} Hz is above the Nyquist limit of {} Hz and will alias",
                self.frequency, nyquist
            ));
        }

        warnings
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bit_depth: 16,
            waveform: WaveformKind::Sine,
            frequency: 440.0,
            amplitude: 0.5,
            duration: 1,
        }
    }
}
