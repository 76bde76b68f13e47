//! Error types for encoding and decoding.

use thiserror::Error;

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Result type for decoding and inspection operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while writing samples into a WAV buffer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    /// The amplitude sequence yielded more samples than were declared.
    #[error("buffer overrun: sample {index} exceeds the declared length of {declared}")]
    BufferOverrun {
        /// Declared sample count the buffer was sized for.
        declared: usize,
        /// Index of the first sample that did not fit.
        index: usize,
    },

    /// A NaN or infinite amplitude was encountered.
    #[error("non-finite sample at index {index}: {value}")]
    NonFiniteSample {
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The declared sample count does not fit a RIFF/WAVE file.
    #[error("declared length of {declared} samples exceeds the WAV size limit of {max} samples")]
    TooLong {
        /// Declared sample count.
        declared: usize,
        /// Largest sample count a mono 16-bit file can hold.
        max: usize,
    },
}

impl EncodeError {
    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::BufferOverrun { .. } => "WAVURI_001",
            EncodeError::NonFiniteSample { .. } => "WAVURI_002",
            EncodeError::TooLong { .. } => "WAVURI_003",
        }
    }

    /// Returns the index of the sample that caused the error, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            EncodeError::BufferOverrun { index, .. } => Some(*index),
            EncodeError::NonFiniteSample { index, .. } => Some(*index),
            EncodeError::TooLong { .. } => None,
        }
    }
}

/// Errors that can occur while decoding a data URI or parsing a WAV header.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input does not start with `data:audio/wav;base64,`.
    #[error("missing data URI prefix 'data:audio/wav;base64,'")]
    MissingPrefix,

    /// The payload after the prefix is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The bytes are not a well-formed RIFF/WAVE file.
    #[error("malformed WAV at offset {offset}: {message}")]
    Malformed {
        /// Description of what went wrong.
        message: String,
        /// Byte offset where the problem was found.
        offset: usize,
    },
}

impl DecodeError {
    /// Creates a malformed-file error at the given byte offset.
    pub fn malformed(message: impl Into<String>, offset: usize) -> Self {
        Self::Malformed {
            message: message.into(),
            offset,
        }
    }

    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::MissingPrefix => "WAVURI_101",
            DecodeError::InvalidBase64(_) => "WAVURI_102",
            DecodeError::Malformed { .. } => "WAVURI_103",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrun_message_names_index() {
        let err = EncodeError::BufferOverrun {
            declared: 2,
            index: 2,
        };
        assert!(err.to_string().contains("sample 2"));
        assert!(err.to_string().contains("declared length of 2"));
        assert_eq!(err.code(), "WAVURI_001");
        assert_eq!(err.index(), Some(2));
    }

    #[test]
    fn test_non_finite_message_names_index() {
        let err = EncodeError::NonFiniteSample {
            index: 7,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("index 7"));
        assert!(err.to_string().contains("NaN"));
        assert_eq!(err.code(), "WAVURI_002");
    }

    #[test]
    fn test_too_long_message() {
        let err = EncodeError::TooLong {
            declared: usize::MAX,
            max: 10,
        };
        assert!(err.to_string().contains("size limit of 10"));
        assert_eq!(err.code(), "WAVURI_003");
        assert_eq!(err.index(), None);
    }

    #[test]
    fn test_malformed_helper() {
        let err = DecodeError::malformed("missing data chunk", 12);
        assert!(err.to_string().contains("offset 12"));
        assert!(err.to_string().contains("missing data chunk"));
        assert_eq!(err.code(), "WAVURI_103");
    }
}
