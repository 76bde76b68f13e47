//! Data URI transport encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{DecodeError, DecodeResult};

/// Prefix of every encoded payload.
pub const DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

/// Wraps WAV bytes in a `data:audio/wav;base64,` URI.
///
/// Standard alphabet, padded, no line breaks.
pub fn to_data_uri(wav_data: &[u8]) -> String {
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + wav_data.len().div_ceil(3) * 4);
    uri.push_str(DATA_URI_PREFIX);
    STANDARD.encode_string(wav_data, &mut uri);
    uri
}

/// Recovers the WAV bytes from a URI produced by [`to_data_uri`].
pub fn decode_data_uri(uri: &str) -> DecodeResult<Vec<u8>> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    Ok(STANDARD.decode(payload)?)
}
