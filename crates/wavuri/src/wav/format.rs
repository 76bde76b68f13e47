//! WAV file format parameters.

use serde::Serialize;

/// Length of the canonical RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// Bytes per 16-bit sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Bits per sample written into the `fmt ` chunk.
pub const BITS_PER_SAMPLE: u16 = 16;

/// `fmt ` chunk audio format tag for linear PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// Largest mono sample count whose RIFF size still fits the 32-bit field.
pub const MAX_SAMPLES: usize = (u32::MAX as usize - (HEADER_LEN - 8)) / BYTES_PER_SAMPLE;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavFormat {
    /// Number of channels (always 1).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    ///
    /// A sample rate of 0 is accepted and produces a header that decoders
    /// will parse but cannot play.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second), wrapping at 32 bits like the header field.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(self.block_align() as u32)
    }

    /// Size of the data section for `num_samples` frames, wrapping at 32 bits.
    ///
    /// Use [`WavFormat::checked_file_len`] first when the count is untrusted.
    pub fn data_size(&self, num_samples: usize) -> u32 {
        (num_samples as u64).wrapping_mul(self.block_align() as u64) as u32
    }

    /// Total file length in bytes for `num_samples` frames.
    ///
    /// Returns None when the length overflows `usize` or the RIFF size field
    /// (`file length - 8`) would not fit in a `u32`.
    pub fn checked_file_len(&self, num_samples: usize) -> Option<usize> {
        let file_len = num_samples
            .checked_mul(self.block_align() as usize)?
            .checked_add(HEADER_LEN)?;
        u32::try_from(file_len - 8).ok()?;
        Some(file_len)
    }
}
