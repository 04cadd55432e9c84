//! wavegen: mono 16-bit PCM waveform synthesis.
//!
//! Generates a sine, sawtooth, bipolar square, or triangle wave, writes it
//! as a canonical 44-byte-header WAV file, and writes a theoretical SQNR
//! estimate for the configured bit depth to a companion text file.
//!
//! # Modules
//!
//! - [`audio`]: Waveform generators and the WAV header/sample encoder
//! - [`metrics`]: SQNR estimate
//! - [`generation`]: Pipeline driving synthesis into output sinks
//! - [`config`]: Run parameters (GenerationConfig)
//! - [`error`]: Error types and codes (WavegenError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use wavegen::{render_to_buffer, GenerationConfig, WaveformKind};
//!
//! let config = GenerationConfig {
//!     sample_rate: 8000,
//!     waveform: WaveformKind::Triangle,
//!     ..Default::default()
//! };
//!
//! let (wav_bytes, sqnr_text) = render_to_buffer(&config)?;
//! assert_eq!(wav_bytes.len(), 44 + 2 * 8000);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod metrics;

// Re-export commonly used types at crate root for convenience
pub use audio::{WavHeader, WaveformKind};
pub use config::GenerationConfig;
pub use error::{ErrorCode, Result, WavegenError};
pub use generation::{generate_files, render_to_buffer, synthesize, GenerationSummary, SampleStream};
