//! Mono 16-bit PCM WAV writer.
//!
//! The output layout is the canonical 44-byte RIFF/WAVE header followed by
//! the data section. Nothing variable (timestamps, LIST chunks) is written, so
//! the same samples always produce the same bytes.

mod buffer;
mod format;
mod header;
mod inspect;
mod pcm;


// Re-export public API
pub use buffer::WavBuffer;
pub use format::{
    WavFormat, BITS_PER_SAMPLE, BYTES_PER_SAMPLE, HEADER_LEN, MAX_SAMPLES, PCM_FORMAT_TAG,
};
pub use header::build_header;
pub use inspect::{extract_pcm_data, parse_header, WavInfo};
pub use pcm::{pcm_hash, quantize, FULL_SCALE};
