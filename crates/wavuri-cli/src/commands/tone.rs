//! Tone command implementation
//!
//! Synthesizes a sine tone and prints it as a WAV data URI.

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::info;
use wavuri::Sine;

use super::output;

/// Run the tone command
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Length in seconds
/// * `rate` - Sample rate in Hz
/// * `amplitude` - Peak amplitude, nominally in `[0.0, 1.0]`
/// * `wav_out` - Optional path to also write the raw WAV file
/// * `json_output` - Print a JSON summary instead of the bare URI
pub fn run(
    frequency: f64,
    duration: f64,
    rate: u32,
    amplitude: f64,
    wav_out: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if !frequency.is_finite() || !duration.is_finite() || !amplitude.is_finite() {
        anyhow::bail!("frequency, duration and amplitude must be finite numbers");
    }

    let num_samples = Sine::samples_for(duration, rate);
    info!(frequency, duration, rate, num_samples, "synthesizing tone");

    let samples = Sine::new(frequency, amplitude, rate).take(num_samples);
    let result = wavuri::encode_wav(samples, num_samples, rate).context("Failed to encode tone")?;

    output::emit(&result, wav_out, json_output)?;
    Ok(ExitCode::SUCCESS)
}
