//! Error types for OxiHuff operations.
//!
//! A single error type covers both halves of the codec: I/O failures from
//! the surrounding application and structural failures detected while
//! decoding a compressed container.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The bit stream ran out before an expected structure was complete.
    #[error("Unexpected end of stream: expected {expected} more bit(s)")]
    UnexpectedEof {
        /// Number of bits that were expected but not available.
        expected: usize,
    },

    /// Structurally invalid compressed data.
    #[error("Corrupted data at bit position {bit_position}: {message}")]
    CorruptedData {
        /// Bit position where the corruption was detected.
        bit_position: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Input too large for the container's 4-byte count field.
    #[error("Input too large: count field would need {needed} (limit {})", u32::MAX)]
    TooLarge {
        /// Value the count field would have to hold.
        needed: u64,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a corrupted data error.
    pub fn corrupted(bit_position: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            bit_position,
            message: message.into(),
        }
    }

    /// Create an input-too-large error.
    pub fn too_large(needed: u64) -> Self {
        Self::TooLarge { needed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiHuffError::unexpected_eof(9);
        assert!(err.to_string().contains("9 more bit"));

        let err = OxiHuffError::corrupted(17, "tree too deep");
        assert!(err.to_string().contains("bit position 17"));
        assert!(err.to_string().contains("tree too deep"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiHuffError = io_err.into();
        assert!(matches!(err, OxiHuffError::Io(_)));
    }
}
