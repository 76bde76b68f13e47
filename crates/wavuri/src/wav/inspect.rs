//! WAV header inspection.

use serde::Serialize;

use crate::error::{DecodeError, DecodeResult};

use super::format::HEADER_LEN;

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate from the `fmt ` chunk.
    pub byte_rate: u32,
    /// Block alignment from the `fmt ` chunk.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Declared size of the `data` chunk in bytes.
    pub data_size: u32,
    /// Number of sample frames in the `data` chunk.
    pub num_samples: usize,
}

impl WavInfo {
    /// Duration in seconds, or 0 when the sample rate is 0.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// One RIFF sub-chunk: its id, the offset of its 8-byte header, and its
/// declared body size.
#[derive(Debug, Clone, Copy)]
struct Chunk<'a> {
    id: &'a [u8],
    offset: usize,
    size: u32,
    file: &'a [u8],
}

impl<'a> Chunk<'a> {
    /// The chunk body, or `None` if the file ends before it does.
    fn body(&self) -> Option<&'a [u8]> {
        let start = self.offset + 8;
        let end = start.checked_add(self.size as usize)?;
        self.file.get(start..end)
    }
}

/// Walks the sub-chunks of a RIFF/WAVE file, honoring word padding.
struct Chunks<'a> {
    file: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header_end = self.offset.checked_add(8)?;
        if header_end > self.file.len() {
            return None;
        }

        let chunk = Chunk {
            id: &self.file[self.offset..self.offset + 4],
            offset: self.offset,
            size: read_u32(self.file, self.offset + 4),
            file: self.file,
        };

        // Chunks are word-aligned
        let padded_size = (chunk.size as usize).saturating_add(1) & !1;
        self.offset = header_end.saturating_add(padded_size);
        Some(chunk)
    }
}

/// Checks the `RIFF`/`WAVE` preamble and returns the chunk walk after it.
fn riff_chunks(data: &[u8]) -> DecodeResult<Chunks<'_>> {
    if data.len() < 12 || &data[0..4] != b"RIFF" {
        return Err(DecodeError::malformed(
            format!("expected 'RIFF', got {:?}", &data[..data.len().min(4)]),
            0,
        ));
    }

    if &data[8..12] != b"WAVE" {
        return Err(DecodeError::malformed(
            format!("expected 'WAVE', got {:?}", &data[8..12]),
            8,
        ));
    }

    Ok(Chunks {
        file: data,
        offset: 12,
    })
}

/// Fields of a PCM `fmt ` chunk.
#[derive(Debug, Clone, Copy)]
struct FmtChunk {
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

impl FmtChunk {
    fn parse(chunk: &Chunk<'_>) -> DecodeResult<Self> {
        if chunk.size < 16 {
            return Err(DecodeError::malformed(
                format!("fmt chunk too small: {} bytes", chunk.size),
                chunk.offset,
            ));
        }
        let body = chunk
            .body()
            .ok_or_else(|| DecodeError::malformed("truncated fmt chunk", chunk.offset))?;

        Ok(Self {
            audio_format: read_u16(body, 0),
            channels: read_u16(body, 2),
            sample_rate: read_u32(body, 4),
            byte_rate: read_u32(body, 8),
            block_align: read_u16(body, 12),
            bits_per_sample: read_u16(body, 14),
        })
    }
}

/// Parses the RIFF/WAVE header and returns the `fmt ` and `data` fields.
///
/// Walks chunks from offset 12 so files with extra chunks before `data` are
/// accepted. The data chunk itself is not required to be fully present.
pub fn parse_header(data: &[u8]) -> DecodeResult<WavInfo> {
    if data.len() < HEADER_LEN {
        return Err(DecodeError::malformed(
            format!(
                "file too short: {} bytes (minimum {} required)",
                data.len(),
                HEADER_LEN
            ),
            0,
        ));
    }

    let mut fmt: Option<FmtChunk> = None;

    for chunk in riff_chunks(data)? {
        if chunk.id == b"fmt " {
            fmt = Some(FmtChunk::parse(&chunk)?);
        }

        if chunk.id == b"data" {
            let Some(fmt) = fmt else {
                return Err(DecodeError::malformed(
                    "data chunk found before fmt chunk",
                    chunk.offset,
                ));
            };

            let num_samples = if fmt.block_align > 0 {
                chunk.size as usize / fmt.block_align as usize
            } else {
                0
            };

            return Ok(WavInfo {
                audio_format: fmt.audio_format,
                channels: fmt.channels,
                sample_rate: fmt.sample_rate,
                byte_rate: fmt.byte_rate,
                block_align: fmt.block_align,
                bits_per_sample: fmt.bits_per_sample,
                data_size: chunk.size,
                num_samples,
            });
        }
    }

    if fmt.is_none() {
        return Err(DecodeError::malformed("missing fmt chunk", 12));
    }

    Err(DecodeError::malformed("missing data chunk", 12))
}

/// Returns the body of the `data` chunk.
///
/// `None` if the bytes are not RIFF/WAVE, have no `data` chunk, or end before
/// the size the chunk declares.
pub fn extract_pcm_data(data: &[u8]) -> Option<&[u8]> {
    riff_chunks(data)
        .ok()?
        .find(|chunk| chunk.id == b"data")?
        .body()
}
