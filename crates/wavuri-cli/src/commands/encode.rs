//! Encode command implementation
//!
//! Reads amplitude samples and prints them as a WAV data URI.

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::info;

use super::output;
use crate::input::{load_samples, SampleInput};

/// Resolved encode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    pub sample_rate: u32,
    pub declared_len: usize,
}

/// Merges command-line flags with settings carried by the input.
///
/// Flags win over the input file. The declared length falls back to the
/// number of samples read.
pub fn resolve_settings(
    input: &SampleInput,
    rate: Option<u32>,
    declared_len: Option<usize>,
) -> Result<EncodeSettings> {
    let sample_rate = rate.or(input.sample_rate).ok_or_else(|| {
        anyhow::anyhow!("no sample rate given (pass --rate or set sample_rate in the request)")
    })?;
    let declared_len = declared_len
        .or(input.declared_len)
        .unwrap_or(input.samples.len());

    Ok(EncodeSettings {
        sample_rate,
        declared_len,
    })
}

/// Run the encode command
///
/// # Arguments
/// * `input_path` - Sample file, or `-` for stdin
/// * `rate` - Sample rate override in Hz
/// * `declared_len` - Declared sample count override
/// * `wav_out` - Optional path to also write the raw WAV file
/// * `json_output` - Print a JSON summary instead of the bare URI
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    input_path: &str,
    rate: Option<u32>,
    declared_len: Option<usize>,
    wav_out: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let input = load_samples(input_path)?;
    let settings = resolve_settings(&input, rate, declared_len)?;

    info!(
        input = input_path,
        samples = input.samples.len(),
        sample_rate = settings.sample_rate,
        declared_len = settings.declared_len,
        "encoding samples"
    );

    let result = wavuri::encode_wav(input.samples, settings.declared_len, settings.sample_rate)
        .with_context(|| format!("Failed to encode samples from {}", input_path))?;

    output::emit(&result, wav_out, json_output)?;
    Ok(ExitCode::SUCCESS)
}
