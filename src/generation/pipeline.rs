//! Synthesis pipeline.
//!
//! Writes the WAV header, streams one sample per timeline index into the
//! audio sink, then writes the SQNR estimate into the metrics sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::audio::{write_header, write_sample, HEADER_LEN};
use crate::config::GenerationConfig;
use crate::error::{Result, WavegenError};
use crate::metrics::write_sqnr;

/// Lazy, restartable sequence of samples for a config.
///
/// Sample `i` is generated at `t = i / sample_rate`. Cloning the stream or
/// building a new one replays the same values.
#[derive(Debug, Clone)]
pub struct SampleStream {
    config: GenerationConfig,
    index: u64,
    end: u64,
}

impl SampleStream {
    /// Creates a stream over the full timeline of `config`.
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            index: 0,
            end: config.num_samples(),
        }
    }

    /// Returns the sample at `index` without advancing the stream.
    pub fn sample_at(&self, index: u64) -> i16 {
        let t = self.config.time_at(index);
        self.config
            .waveform
            .generate(t, self.config.amplitude, self.config.frequency)
    }
}

impl Iterator for SampleStream {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.index >= self.end {
            return None;
        }
        let sample = self.sample_at(self.index);
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleStream {}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSummary {
    /// Samples written to the data chunk.
    pub num_samples: u32,
    /// Total bytes written to the audio sink, header included.
    pub audio_bytes: u64,
    /// SQNR estimate written to the metrics sink, in dB.
    pub sqnr_db: f64,
}

/// Runs synthesis into arbitrary sinks.
///
/// Both sinks are flushed before returning.
pub fn synthesize<A, M>(
    config: &GenerationConfig,
    audio: &mut A,
    metrics: &mut M,
) -> Result<GenerationSummary>
where
    A: Write,
    M: Write,
{
    let num_samples = config.header_sample_count()?;

    write_header(audio, config.sample_rate, num_samples)
        .map_err(|e| WavegenError::write_failed("WAV header", e))?;

    for sample in SampleStream::new(*config) {
        write_sample(audio, sample).map_err(|e| WavegenError::write_failed("WAV samples", e))?;
    }
    audio
        .flush()
        .map_err(|e| WavegenError::write_failed("WAV file", e))?;

    let sqnr_db = write_sqnr(metrics, config.bit_depth)
        .map_err(|e| WavegenError::write_failed("SQNR value", e))?;
    metrics
        .flush()
        .map_err(|e| WavegenError::write_failed("SQNR file", e))?;

    Ok(GenerationSummary {
        num_samples,
        audio_bytes: HEADER_LEN as u64 + u64::from(num_samples) * 2,
        sqnr_db,
    })
}

/// Generates the WAV file and the SQNR text file.
///
/// Both files are created before anything is written, so a failure to open
/// either one leaves no sample data behind. A file created before the other
/// failed to open may remain on disk, empty.
pub fn generate_files(
    config: &GenerationConfig,
    audio_path: &Path,
    metrics_path: &Path,
) -> Result<GenerationSummary> {
    config.header_sample_count()?;

    let audio_file = File::create(audio_path)
        .map_err(|e| WavegenError::audio_output_failed(audio_path.display().to_string(), e))?;
    let metrics_file = File::create(metrics_path)
        .map_err(|e| WavegenError::metrics_output_failed(metrics_path.display().to_string(), e))?;

    let mut audio = BufWriter::new(audio_file);
    let mut metrics = BufWriter::new(metrics_file);

    let summary = synthesize(config, &mut audio, &mut metrics)?;

    tracing::debug!(
        path = %audio_path.display(),
        bytes = summary.audio_bytes,
        "wrote WAV file"
    );
    tracing::debug!(
        path = %metrics_path.display(),
        sqnr_db = summary.sqnr_db,
        "wrote SQNR file"
    );

    Ok(summary)
}

/// Runs synthesis in memory.
///
/// Returns the WAV file contents and the SQNR text.
pub fn render_to_buffer(config: &GenerationConfig) -> Result<(Vec<u8>, String)> {
    let capacity = usize::try_from(config.num_samples() * 2).unwrap_or(0) + HEADER_LEN;
    let mut audio = Vec::with_capacity(capacity);
    let mut metrics = Vec::new();

    synthesize(config, &mut audio, &mut metrics)?;

    Ok((audio, String::from_utf8_lossy(&metrics).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::WaveformKind;
    use crate::error::ErrorCode;
    use std::io;
    use tempfile::tempdir;

    fn u32_at(buf: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
    }

    fn config(waveform: WaveformKind) -> GenerationConfig {
        GenerationConfig {
            sample_rate: 8000,
            bit_depth: 16,
            waveform,
            frequency: 440.0,
            amplitude: 0.5,
            duration: 1,
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn stream_length_matches_timeline() {
        let stream = SampleStream::new(config(WaveformKind::Sine));
        assert_eq!(stream.len(), 8000);
        assert_eq!(stream.count(), 8000);
    }

    #[test]
    fn stream_is_restartable() {
        let cfg = config(WaveformKind::Sawtooth);
        let first: Vec<i16> = SampleStream::new(cfg).take(100).collect();
        let second: Vec<i16> = SampleStream::new(cfg).take(100).collect();
        assert_eq!(first, second);

        let mut stream = SampleStream::new(cfg);
        stream.next();
        assert_eq!(stream.clone().next(), Some(stream.sample_at(1)));
    }

    #[test]
    fn stream_matches_direct_generation() {
        let cfg = config(WaveformKind::Triangle);
        for (i, sample) in SampleStream::new(cfg).enumerate().step_by(397) {
            let t = i as f64 / 8000.0;
            assert_eq!(sample, WaveformKind::Triangle.generate(t, 0.5, 440.0));
        }
    }

    #[test]
    fn render_produces_expected_sizes() {
        let (audio, metrics) = render_to_buffer(&config(WaveformKind::Sine)).unwrap();

        assert_eq!(audio.len(), 16044);
        assert_eq!(u32_at(&audio, 4) as usize, audio.len() - 8);
        assert_eq!(u32_at(&audio, 40) as usize, audio.len() - 44);

        let sqnr: f64 = metrics.parse().unwrap();
        assert!((sqnr - 96.32).abs() < 1e-12);
    }

    #[test]
    fn first_sine_sample_is_zero() {
        let (audio, _) = render_to_buffer(&config(WaveformKind::Sine)).unwrap();
        assert_eq!(&audio[44..46], &[0, 0]);
    }

    #[test]
    fn all_waveforms_render() {
        for kind in WaveformKind::ALL {
            let (audio, _) = render_to_buffer(&config(kind)).unwrap();
            assert_eq!(audio.len(), 16044, "{}", kind);
        }
    }

    #[test]
    fn summary_reports_counts() {
        let mut audio = Vec::new();
        let mut metrics = Vec::new();
        let summary = synthesize(&config(WaveformKind::Sine), &mut audio, &mut metrics).unwrap();

        assert_eq!(summary.num_samples, 8000);
        assert_eq!(summary.audio_bytes, audio.len() as u64);
        assert!((summary.sqnr_db - 96.32).abs() < 1e-12);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut metrics = Vec::new();
        let err = synthesize(&config(WaveformKind::Sine), &mut FailingSink, &mut metrics)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::WriteFailed);
        assert!(metrics.is_empty());
    }

    #[test]
    fn oversized_timeline_is_rejected_before_writing() {
        let cfg = GenerationConfig {
            sample_rate: u32::MAX,
            duration: 2,
            ..config(WaveformKind::Sine)
        };
        let mut audio = Vec::new();
        let mut metrics = Vec::new();
        let err = synthesize(&cfg, &mut audio, &mut metrics).unwrap_err();

        assert_eq!(err.code, ErrorCode::TooManySamples);
        assert!(audio.is_empty());
        assert!(metrics.is_empty());
    }

    #[test]
    fn generate_files_writes_both_outputs() {
        let dir = tempdir().unwrap();
        let wav_path = dir.path().join("tone.wav");
        let sqnr_path = dir.path().join("sqnr.txt");

        let cfg = GenerationConfig {
            bit_depth: 8,
            ..config(WaveformKind::BipolarSquare)
        };
        generate_files(&cfg, &wav_path, &sqnr_path).unwrap();

        assert_eq!(std::fs::metadata(&wav_path).unwrap().len(), 16044);

        let reader = hound::WavReader::open(&wav_path).unwrap();
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.len(), 8000);

        let text = std::fs::read_to_string(&sqnr_path).unwrap();
        let sqnr: f64 = text.parse().unwrap();
        assert!((sqnr - 48.16).abs() < 1e-12);
    }

    #[test]
    fn unwritable_metrics_path_fails() {
        let dir = tempdir().unwrap();
        let wav_path = dir.path().join("tone.wav");
        let sqnr_path = dir.path().join("missing").join("sqnr.txt");

        let err = generate_files(&config(WaveformKind::Sine), &wav_path, &sqnr_path).unwrap_err();

        assert_eq!(err.code, ErrorCode::MetricsOutputFailed);
        // The WAV file was created first but nothing was written to it.
        assert_eq!(std::fs::metadata(&wav_path).unwrap().len(), 0);
    }

    #[test]
    fn unwritable_audio_path_fails_before_metrics() {
        let dir = tempdir().unwrap();
        let wav_path = dir.path().join("missing").join("tone.wav");
        let sqnr_path = dir.path().join("sqnr.txt");

        let err = generate_files(&config(WaveformKind::Sine), &wav_path, &sqnr_path).unwrap_err();

        assert_eq!(err.code, ErrorCode::AudioOutputFailed);
        assert!(!sqnr_path.exists());
    }
}
