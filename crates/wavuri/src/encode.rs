//! Main entry points: amplitudes in, WAV bytes or data URI out.

use tracing::{debug, warn};

use crate::error::EncodeResult;
use crate::transport::to_data_uri;
use crate::wav::{pcm_hash, WavBuffer};

/// Result of encoding a sample sequence.
#[derive(Debug, Clone)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the data section only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample count the file was sized for.
    pub declared_len: usize,
    /// Samples actually taken from the sequence.
    pub num_samples: usize,
}

impl EncodedWav {
    /// Duration of the file in seconds, padding included.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.declared_len as f64 / self.sample_rate as f64
    }

    /// Whether the sequence filled every declared slot.
    pub fn is_complete(&self) -> bool {
        self.num_samples == self.declared_len
    }

    /// The file as a `data:audio/wav;base64,` URI.
    pub fn to_data_uri(&self) -> String {
        to_data_uri(&self.wav_data)
    }
}

fn fill<I>(amplitudes: I, declared_len: usize, sample_rate: u32) -> EncodeResult<WavBuffer>
where
    I: IntoIterator<Item = f64>,
{
    let mut buffer = WavBuffer::mono(sample_rate, declared_len)?;
    buffer.extend_from(amplitudes)?;

    if buffer.written_len() < declared_len {
        warn!(
            declared_len,
            written = buffer.written_len(),
            "amplitude sequence ended early, remaining samples are silent"
        );
    }

    debug!(
        sample_rate,
        samples = buffer.written_len(),
        bytes = buffer.as_bytes().len(),
        "encoded WAV buffer"
    );

    Ok(buffer)
}

/// Encodes `amplitudes` as a mono 16-bit WAV and returns it as a data URI.
///
/// `declared_len` sizes the output; the sequence's own end stops the walk.
///
/// # Errors
/// * [`EncodeError::TooLong`](crate::EncodeError::TooLong) if `declared_len`
///   does not fit a WAV file; nothing is allocated
/// * [`EncodeError::BufferOverrun`](crate::EncodeError::BufferOverrun) if the
///   sequence yields more than `declared_len` values
/// * [`EncodeError::NonFiniteSample`](crate::EncodeError::NonFiniteSample) on
///   the first NaN or infinite value
pub fn encode<I>(amplitudes: I, declared_len: usize, sample_rate: u32) -> EncodeResult<String>
where
    I: IntoIterator<Item = f64>,
{
    let buffer = fill(amplitudes, declared_len, sample_rate)?;
    Ok(to_data_uri(buffer.as_bytes()))
}

/// Encodes `amplitudes` and returns the raw file with its metadata.
///
/// Same contract and errors as [`encode`].
pub fn encode_wav<I>(amplitudes: I, declared_len: usize, sample_rate: u32) -> EncodeResult<EncodedWav>
where
    I: IntoIterator<Item = f64>,
{
    let buffer = fill(amplitudes, declared_len, sample_rate)?;
    let pcm_hash = pcm_hash(buffer.pcm_data());
    let num_samples = buffer.written_len();

    Ok(EncodedWav {
        wav_data: buffer.into_bytes(),
        pcm_hash,
        sample_rate,
        declared_len,
        num_samples,
    })
}
