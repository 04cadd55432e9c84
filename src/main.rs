//! wavegen: synthesize a waveform to WAV and write its SQNR estimate.
//!
//! Usage: `wavegen fs m wavetype f A T fn.wav sqnr.txt`

use std::time::Instant;

use tracing_subscriber::EnvFilter;

use wavegen::audio::samples_to_duration;
use wavegen::cli::Cli;
use wavegen::error::Result;
use wavegen::generation::generate_files;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let (config, fell_back) = cli.to_config();

    if fell_back {
        tracing::warn!(
            requested = %cli.waveform,
            "Unsupported waveform type. Using sine wave by default."
        );
    }
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        sample_rate = config.sample_rate,
        bit_depth = config.bit_depth,
        waveform = %config.waveform,
        frequency = config.frequency,
        amplitude = config.amplitude,
        duration = config.duration,
        "generating waveform"
    );

    let start_time = Instant::now();
    let summary = generate_files(&config, &cli.audio_output, &cli.metrics_output)?;

    tracing::info!(
        samples = summary.num_samples,
        audio_seconds = samples_to_duration(summary.num_samples as usize, config.sample_rate),
        sqnr_db = summary.sqnr_db,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "WAV file and SQNR file generated successfully"
    );

    Ok(())
}
