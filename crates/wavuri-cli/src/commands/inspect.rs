//! Inspect command implementation
//!
//! Parses the header of a WAV file or a WAV data URI.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use wavuri::wav::{extract_pcm_data, pcm_hash};
use wavuri::{decode_data_uri, parse_header, WavInfo};

use crate::input::read_bytes;

/// Returns the WAV bytes behind `raw`, decoding it first if it is a data URI.
pub fn wav_bytes(raw: Vec<u8>) -> Result<Vec<u8>> {
    if !raw.starts_with(b"data:") {
        return Ok(raw);
    }

    let text = std::str::from_utf8(&raw).context("Data URI is not valid UTF-8")?;
    Ok(decode_data_uri(text.trim())?)
}

/// Header fields plus the hash of the PCM data section.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    #[serde(flatten)]
    pub info: WavInfo,
    /// BLAKE3 hex of the data chunk; absent if the chunk is truncated.
    pub pcm_hash: Option<String>,
}

/// Parses `bytes` as a WAV file and hashes its data chunk.
pub fn inspect_bytes(bytes: &[u8]) -> Result<InspectOutput> {
    let info = parse_header(bytes)?;
    let pcm_hash = extract_pcm_data(bytes).map(pcm_hash);
    Ok(InspectOutput { info, pcm_hash })
}

/// Run the inspect command
///
/// # Arguments
/// * `input_path` - WAV file or file holding a data URI, `-` for stdin
/// * `json_output` - Print the header as JSON
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = wav_bytes(read_bytes(input_path)?)
        .with_context(|| format!("Failed to decode {}", input_path))?;
    let output = inspect_bytes(&bytes)
        .with_context(|| format!("Failed to parse WAV header: {}", input_path))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(input_path, &output, bytes.len());
    }

    Ok(ExitCode::SUCCESS)
}

fn print_human(input_path: &str, output: &InspectOutput, file_len: usize) {
    let info = &output.info;
    println!("{} {}", "Inspecting:".cyan().bold(), input_path);
    println!("  {:<16}{}", "format", format_name(info.audio_format));
    println!("  {:<16}{}", "channels", info.channels);
    println!("  {:<16}{} Hz", "sample rate", info.sample_rate);
    println!("  {:<16}{}", "bits/sample", info.bits_per_sample);
    println!("  {:<16}{} B/s", "byte rate", info.byte_rate);
    println!("  {:<16}{}", "block align", info.block_align);
    println!("  {:<16}{} bytes", "data size", info.data_size);
    println!("  {:<16}{}", "samples", info.num_samples);
    println!("  {:<16}{:.3} s", "duration", info.duration_seconds());
    println!("  {:<16}{} bytes", "file size", file_len);
    match &output.pcm_hash {
        Some(hash) => println!("  {:<16}{}", "pcm hash", hash),
        None => println!("  {:<16}{}", "pcm hash", "truncated data chunk".yellow()),
    }
}

fn format_name(audio_format: u16) -> String {
    match audio_format {
        1 => "PCM".to_string(),
        3 => "IEEE float".to_string(),
        other => format!("unknown ({})", other),
    }
}
