//! Error types for wavegen.
//!
//! Defines the error codes and the error type used by the generation
//! pipeline so the binary can report failures consistently.

use std::fmt;

/// Error codes identifying why a generation run failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The WAV output file could not be created.
    /// Trigger: Missing parent directory, permission denied, path is a directory.
    AudioOutputFailed,

    /// The SQNR text file could not be created.
    /// Trigger: Missing parent directory, permission denied, path is a directory.
    MetricsOutputFailed,

    /// Writing or flushing an already-open output failed.
    /// Trigger: Disk full, I/O error on the underlying device.
    WriteFailed,

    /// The requested timeline does not fit in a WAV header.
    /// Trigger: sample_rate * duration * 2 + 36 exceeds u32::MAX.
    TooManySamples,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AudioOutputFailed => "AUDIO_OUTPUT_FAILED",
            ErrorCode::MetricsOutputFailed => "METRICS_OUTPUT_FAILED",
            ErrorCode::WriteFailed => "WRITE_FAILED",
            ErrorCode::TooManySamples => "TOO_MANY_SAMPLES",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::AudioOutputFailed => "Failed to open the WAV output file for writing",
            ErrorCode::MetricsOutputFailed => "Failed to open the SQNR output file for writing",
            ErrorCode::WriteFailed => "Failed to write generated output",
            ErrorCode::TooManySamples => "Sample count exceeds what a WAV header can describe",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::AudioOutputFailed | ErrorCode::MetricsOutputFailed => {
                "Check that the parent directory exists and is writable, \
                 and that the path does not name a directory"
            }
            ErrorCode::WriteFailed => "Check available disk space and retry",
            ErrorCode::TooManySamples => {
                "Reduce the sample rate or duration so the audio data stays under 4 GiB"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generation runs.
#[derive(Debug)]
pub struct WavegenError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl WavegenError {
    /// Creates a new WavegenError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new WavegenError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an AUDIO_OUTPUT_FAILED error.
    pub fn audio_output_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::AudioOutputFailed,
            format!("Cannot open WAV file {}: {}", path.into(), source),
            source,
        )
    }

    /// Creates a METRICS_OUTPUT_FAILED error.
    pub fn metrics_output_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::MetricsOutputFailed,
            format!("Cannot open SQNR file {}: {}", path.into(), source),
            source,
        )
    }

    /// Creates a WRITE_FAILED error.
    pub fn write_failed(what: &str, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::WriteFailed,
            format!("Failed to write {}: {}", what, source),
            source,
        )
    }

    /// Creates a TOO_MANY_SAMPLES error.
    pub fn too_many_samples(sample_rate: u32, duration: u32) -> Self {
        Self::new(
            ErrorCode::TooManySamples,
            format!(
                "{} Hz for {} seconds does not fit in a 16-bit mono WAV file",
                sample_rate, duration
            ),
        )
    }
}

impl fmt::Display for WavegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for WavegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using WavegenError.
pub type Result<T> = std::result::Result<T, WavegenError>;
