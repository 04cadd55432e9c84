//! Waveform generation module.
//!
//! Provides the pipeline that drives synthesis into the output sinks.

pub mod pipeline;

// Re-export commonly used items
pub use pipeline::{generate_files, render_to_buffer, synthesize, GenerationSummary, SampleStream};
