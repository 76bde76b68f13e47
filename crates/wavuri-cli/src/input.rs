//! Sample input loading.
//!
//! Samples can be given in three shapes, detected from the first
//! non-whitespace character:
//!
//! - `{` - a JSON request object with `samples` and optional `sample_rate`
//!   and `declared_len`
//! - `[` - a bare JSON array of numbers
//! - anything else - numbers separated by whitespace or commas

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// JSON request file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeRequest {
    /// Amplitudes, nominally in `[-1.0, 1.0]`.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    #[serde(default)]
    pub sample_rate: Option<u32>,
    /// Sample count to size the file for. Defaults to `samples.len()`.
    #[serde(default)]
    pub declared_len: Option<usize>,
}

/// Samples plus whatever settings came with them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleInput {
    pub samples: Vec<f64>,
    pub sample_rate: Option<u32>,
    pub declared_len: Option<usize>,
}

impl From<EncodeRequest> for SampleInput {
    fn from(request: EncodeRequest) -> Self {
        Self {
            samples: request.samples,
            sample_rate: request.sample_rate,
            declared_len: request.declared_len,
        }
    }
}

impl SampleInput {
    fn bare(samples: Vec<f64>) -> Self {
        Self {
            samples,
            sample_rate: None,
            declared_len: None,
        }
    }
}

/// Reads a whole file, or stdin for `-`, into bytes.
pub fn read_bytes(path: &str) -> Result<Vec<u8>> {
    if path == STDIN_PATH {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read(path).with_context(|| format!("Failed to read input file: {}", path))
}

/// Reads a whole file, or stdin for `-`, as UTF-8 text.
pub fn read_text(path: &str) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).with_context(|| format!("Input is not valid UTF-8: {}", path))
}

/// Parses sample text in any of the supported shapes.
pub fn parse_samples(text: &str) -> Result<SampleInput> {
    let trimmed = text.trim_start();

    if trimmed.starts_with('{') {
        let request: EncodeRequest =
            serde_json::from_str(trimmed).context("Failed to parse JSON request")?;
        return Ok(request.into());
    }

    if trimmed.starts_with('[') {
        let samples: Vec<f64> =
            serde_json::from_str(trimmed).context("Failed to parse JSON sample array")?;
        return Ok(SampleInput::bare(samples));
    }

    let samples = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid sample #{}: '{}'", i, token))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SampleInput::bare(samples))
}

/// Loads and parses samples from a file or stdin.
pub fn load_samples(path: &str) -> Result<SampleInput> {
    let text = read_text(path)?;
    parse_samples(&text).with_context(|| format!("Failed to load samples from {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_request_object() {
        let input =
            parse_samples(r#"{"sample_rate": 8000, "samples": [0.0, 1.0, -1.0]}"#).unwrap();
        assert_eq!(input.samples, vec![0.0, 1.0, -1.0]);
        assert_eq!(input.sample_rate, Some(8000));
        assert_eq!(input.declared_len, None);
    }

    #[test]
    fn test_parse_request_with_declared_len() {
        let input = parse_samples(r#"{"samples": [0.5], "declared_len": 4}"#).unwrap();
        assert_eq!(input.declared_len, Some(4));
        assert_eq!(input.sample_rate, None);
    }

    #[test]
    fn test_parse_request_rejects_unknown_fields() {
        assert!(parse_samples(r#"{"samples": [], "channels": 2}"#).is_err());
    }

    #[test]
    fn test_parse_json_array() {
        let input = parse_samples("  [0.25, -0.25]\n").unwrap();
        assert_eq!(input, SampleInput::bare(vec![0.25, -0.25]));
    }

    #[test]
    fn test_parse_plain_text() {
        let input = parse_samples("0.0 1.0\n-1.0, 0.5\n\n").unwrap();
        assert_eq!(input.samples, vec![0.0, 1.0, -1.0, 0.5]);
    }

    #[test]
    fn test_parse_plain_text_keeps_nan() {
        let input = parse_samples("0.0 NaN").unwrap();
        assert!(input.samples[1].is_nan());
    }

    #[test]
    fn test_parse_plain_text_error_names_token() {
        let err = parse_samples("0.0 loud 1.0").unwrap_err();
        assert!(format!("{:#}", err).contains("'loud'"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_samples("").unwrap().samples.is_empty());
        assert!(parse_samples("   \n").unwrap().samples.is_empty());
    }
}
