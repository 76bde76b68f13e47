//! Fixed-size WAV buffer and the sample encoder that fills it.

use crate::error::{EncodeError, EncodeResult};

use super::format::{WavFormat, BYTES_PER_SAMPLE, HEADER_LEN, MAX_SAMPLES};
use super::header::build_header;
use super::pcm::quantize;

/// A complete WAV file under construction.
///
/// The buffer is allocated once, zero-filled, for exactly the declared number
/// of samples and is never resized. Samples are appended in order; slots that
/// are never written stay silent.
#[derive(Debug, Clone)]
pub struct WavBuffer {
    bytes: Vec<u8>,
    format: WavFormat,
    declared_len: usize,
    written: usize,
}

impl WavBuffer {
    /// Allocates a buffer for `declared_len` samples and writes the header.
    ///
    /// Fails with [`EncodeError::TooLong`] before allocating if the file
    /// would not fit the 32-bit RIFF size fields.
    pub fn new(format: WavFormat, declared_len: usize) -> EncodeResult<Self> {
        let file_len = format
            .checked_file_len(declared_len)
            .ok_or(EncodeError::TooLong {
                declared: declared_len,
                max: MAX_SAMPLES,
            })?;

        let mut bytes = vec![0u8; file_len];
        bytes[..HEADER_LEN].copy_from_slice(&build_header(&format, declared_len));

        Ok(Self {
            bytes,
            format,
            declared_len,
            written: 0,
        })
    }

    /// Allocates a mono buffer at `sample_rate`.
    pub fn mono(sample_rate: u32, declared_len: usize) -> EncodeResult<Self> {
        Self::new(WavFormat::mono(sample_rate), declared_len)
    }

    /// Quantizes one amplitude into the next free sample slot.
    ///
    /// Fails without touching the buffer if every declared slot is already
    /// used or the amplitude is NaN or infinite.
    pub fn push(&mut self, amplitude: f64) -> EncodeResult<()> {
        let index = self.written;

        if index >= self.declared_len {
            return Err(EncodeError::BufferOverrun {
                declared: self.declared_len,
                index,
            });
        }

        if !amplitude.is_finite() {
            return Err(EncodeError::NonFiniteSample {
                index,
                value: amplitude,
            });
        }

        let offset = HEADER_LEN + index * BYTES_PER_SAMPLE;
        self.bytes[offset..offset + BYTES_PER_SAMPLE]
            .copy_from_slice(&quantize(amplitude).to_le_bytes());
        self.written += 1;

        Ok(())
    }

    /// Walks `amplitudes` once, pushing every element until it is exhausted.
    pub fn extend_from<I>(&mut self, amplitudes: I) -> EncodeResult<()>
    where
        I: IntoIterator<Item = f64>,
    {
        for amplitude in amplitudes {
            self.push(amplitude)?;
        }
        Ok(())
    }

    /// Format the header was written with.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Number of samples the buffer was sized for.
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Number of samples written so far.
    pub fn written_len(&self) -> usize {
        self.written
    }

    /// Whole file, header included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Data section only.
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// Consumes the buffer and returns the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for WavBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
