//! RIFF/WAVE header builder.

use super::format::{WavFormat, HEADER_LEN, PCM_FORMAT_TAG};

/// `fmt ` chunk body size for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// Builds the 44-byte header for a file holding `num_samples` frames.
///
/// All multi-byte fields are little-endian. No validation is performed here;
/// [`WavBuffer::new`](super::WavBuffer::new) rejects counts beyond
/// [`MAX_SAMPLES`](super::MAX_SAMPLES) before the header is built.
pub fn build_header(format: &WavFormat, num_samples: usize) -> [u8; HEADER_LEN] {
    let data_size = format.data_size(num_samples);
    // File size minus the 8 bytes of the RIFF id and size fields
    let riff_size = data_size.wrapping_add(HEADER_LEN as u32 - 8);

    let mut header = [0u8; HEADER_LEN];

    // RIFF header
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&riff_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    header[20..22].copy_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    // data chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}
