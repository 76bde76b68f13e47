//! wavuri
//!
//! Encodes a single pass of floating-point amplitude samples into a mono,
//! 16-bit linear PCM RIFF/WAVE file and wraps it in a
//! `data:audio/wav;base64,` URI.
//!
//! # Overview
//!
//! Encoding runs in three fixed stages:
//!
//! - **Header** - the 44-byte RIFF/WAVE header is computed from the sample
//!   rate and the caller's declared sample count ([`wav::build_header`])
//! - **Samples** - each amplitude is clamped to `[-1.0, 1.0]`, quantized to
//!   `i16` and written little-endian into a fixed-size buffer ([`WavBuffer`])
//! - **Transport** - the finished buffer is base64-encoded behind the data
//!   URI prefix ([`transport::to_data_uri`])
//!
//! The declared sample count only sizes the buffer. The amplitude iterator's
//! own end terminates the walk; an iterator that runs past the declared count
//! is reported as [`EncodeError::BufferOverrun`] instead of writing out of
//! bounds.
//!
//! # Example
//!
//! ```
//! use wavuri::encode;
//!
//! let uri = encode([0.0, 1.0, -1.0], 3, 8000).unwrap();
//! assert!(uri.starts_with("data:audio/wav;base64,UklGR"));
//! ```
//!
//! # Crate Structure
//!
//! - [`encode()`] / [`encode_wav()`] - main entry points
//! - [`sequence`] - linked amplitude cursor
//! - [`tone`] - sine amplitude source
//! - [`transport`] - data URI encoding and decoding
//! - [`wav`] - header builder, sample buffer, header inspection

pub mod encode;
pub mod error;
pub mod sequence;
pub mod tone;
pub mod transport;
pub mod wav;

// Re-export main types at crate root
pub use encode::{encode, encode_wav, EncodedWav};
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use sequence::AmplitudeList;
pub use tone::Sine;
pub use transport::{decode_data_uri, to_data_uri, DATA_URI_PREFIX};
pub use wav::{parse_header, WavBuffer, WavFormat, WavInfo};
