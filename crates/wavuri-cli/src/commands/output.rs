//! Shared output handling for commands that produce a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use wavuri::EncodedWav;

/// Machine-readable summary of an encoded file.
#[derive(Debug, Serialize)]
pub struct EncodeOutput {
    pub sample_rate: u32,
    pub declared_len: usize,
    pub num_samples: usize,
    pub bytes: usize,
    pub duration_seconds: f64,
    pub pcm_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav_path: Option<String>,
    pub data_uri: String,
}

impl EncodeOutput {
    pub fn new(result: &EncodedWav, wav_path: Option<&str>) -> Self {
        Self {
            sample_rate: result.sample_rate,
            declared_len: result.declared_len,
            num_samples: result.num_samples,
            bytes: result.wav_data.len(),
            duration_seconds: result.duration_seconds(),
            pcm_hash: result.pcm_hash.clone(),
            wav_path: wav_path.map(str::to_string),
            data_uri: result.to_data_uri(),
        }
    }
}

/// Writes the WAV file if requested, then prints the data URI or a JSON summary.
pub fn emit(result: &EncodedWav, wav_out: Option<&str>, json_output: bool) -> Result<()> {
    if let Some(path) = wav_out {
        write_wav(Path::new(path), &result.wav_data)?;
        if !json_output {
            eprintln!(
                "{} {} ({} samples, {} bytes)",
                "Wrote".green().bold(),
                path,
                result.declared_len,
                result.wav_data.len()
            );
        }
    }

    if json_output {
        let output = EncodeOutput::new(result, wav_out);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result.to_data_uri());
    }

    Ok(())
}

fn write_wav(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))
}
