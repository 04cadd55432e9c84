//! Audio synthesis and encoding.
//!
//! Provides the waveform generators and the WAV container writer.

pub mod wav;
pub mod waveform;

// Re-export commonly used items
pub use wav::{
    samples_to_duration, write_header, write_sample, WavHeader, BITS_PER_SAMPLE, CHANNELS,
    HEADER_LEN,
};
pub use waveform::WaveformKind;
