//! Sample quantization and PCM hashing.

/// Scale factor from `[-1.0, 1.0]` to `i16`.
///
/// The positive maximum is used for both polarities, so `-32768` is never
/// produced.
pub const FULL_SCALE: f64 = 32767.0;

/// Clamps an amplitude to `[-1.0, 1.0]` and quantizes it to `i16`.
///
/// Rounds to nearest with exact ties going toward positive infinity, so
/// `0.5` maps to `16384` and `-0.5` to `-16383`. Callers are expected to
/// reject non-finite values first; NaN maps to 0 here.
pub fn quantize(amplitude: f64) -> i16 {
    let scaled = amplitude.clamp(-1.0, 1.0) * FULL_SCALE;
    let rounded = scaled.round();
    // round() sends negative ties away from zero; pull them back up
    let value = if scaled - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    };
    value as i16
}

/// BLAKE3 hex digest of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
