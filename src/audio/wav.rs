//! Canonical 44-byte WAV header and PCM sample encoding.
//!
//! Output is always 16-bit PCM, mono, little-endian. The header is written
//! once, up front, from the sample rate and the total sample count.

use std::io::{self, Write};

/// Length of the canonical RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the `fmt ` chunk body for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// WAVE_FORMAT_PCM.
const AUDIO_FORMAT_PCM: u16 = 1;

/// Header fields derived from the sample rate and sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples in the data chunk.
    pub num_samples: u32,
}

impl WavHeader {
    /// Creates a header for `num_samples` mono samples at `sample_rate`.
    pub fn new(sample_rate: u32, num_samples: u32) -> Self {
        Self {
            sample_rate,
            num_samples,
        }
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        CHANNELS * (BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(u32::from(self.block_align()))
    }

    /// Size of the `data` chunk body (subchunk2 size).
    pub fn data_size(&self) -> u32 {
        self.num_samples.wrapping_mul(u32::from(self.block_align()))
    }

    /// RIFF chunk size: total file length minus the 8-byte RIFF preamble.
    pub fn chunk_size(&self) -> u32 {
        self.data_size().wrapping_add(36)
    }

    /// Serializes the header in file order.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        let fields: [&[u8]; 13] = [
            b"RIFF",
            &self.chunk_size().to_le_bytes(),
            b"WAVE",
            b"fmt ",
            &FMT_CHUNK_SIZE.to_le_bytes(),
            &AUDIO_FORMAT_PCM.to_le_bytes(),
            &CHANNELS.to_le_bytes(),
            &self.sample_rate.to_le_bytes(),
            &self.byte_rate().to_le_bytes(),
            &self.block_align().to_le_bytes(),
            &BITS_PER_SAMPLE.to_le_bytes(),
            b"data",
            &self.data_size().to_le_bytes(),
        ];

        let mut offset = 0;
        for field in fields {
            buf[offset..offset + field.len()].copy_from_slice(field);
            offset += field.len();
        }
        debug_assert_eq!(offset, HEADER_LEN);

        buf
    }
}

/// Writes the 44-byte header for `num_samples` mono samples.
pub fn write_header<W: Write>(writer: &mut W, sample_rate: u32, num_samples: u32) -> io::Result<()> {
    writer.write_all(&WavHeader::new(sample_rate, num_samples).to_bytes())
}

/// Writes one sample as little-endian 16-bit PCM.
#[inline]
pub fn write_sample<W: Write>(writer: &mut W, sample: i16) -> io::Result<()> {
    writer.write_all(&sample.to_le_bytes())
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
