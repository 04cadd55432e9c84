//! Command-line argument parser.
//!
//! All eight arguments are positional and required, in a fixed order:
//! `fs m wavetype f A T out.wav sqnr.txt`.

use std::path::PathBuf;

use clap::Parser;

use crate::audio::WaveformKind;
use crate::config::GenerationConfig;

/// wavegen: synthesize a mono 16-bit PCM waveform and its SQNR estimate
#[derive(Parser, Debug)]
#[command(name = "wavegen")]
#[command(about = "Generate a mono 16-bit PCM WAV waveform and a theoretical SQNR estimate")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Sample rate in Hz
    #[arg(value_name = "FS", value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_rate: u32,

    /// Bit depth used for the SQNR estimate
    #[arg(value_name = "M", value_parser = clap::value_parser!(u32).range(1..))]
    pub bit_depth: u32,

    /// Waveform: sine, sawtooth, bipolarsquare or triangle (anything else uses sine)
    #[arg(value_name = "WAVETYPE")]
    pub waveform: String,

    /// Frequency in Hz
    #[arg(value_name = "F")]
    pub frequency: f64,

    /// Amplitude multiplier, nominally 0.0 to 1.0
    #[arg(value_name = "A")]
    pub amplitude: f64,

    /// Duration in seconds
    #[arg(value_name = "T", value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: u32,

    /// Output WAV file path
    #[arg(value_name = "FN_WAV")]
    pub audio_output: PathBuf,

    /// Output SQNR text file path
    #[arg(value_name = "SQNR_TXT")]
    pub metrics_output: PathBuf,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Builds the generation config.
    ///
    /// The second element is `true` when the waveform name was not
    /// recognized and sine was substituted.
    pub fn to_config(&self) -> (GenerationConfig, bool) {
        let (waveform, fell_back) = WaveformKind::resolve(&self.waveform);
        let config = GenerationConfig {
            sample_rate: self.sample_rate,
            bit_depth: self.bit_depth,
            waveform,
            frequency: self.frequency,
            amplitude: self.amplitude,
            duration: self.duration,
        };
        (config, fell_back)
    }
}
