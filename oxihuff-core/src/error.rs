//! Error types for OxiHuff operations.
//!
//! Every failure is a one-shot abort of the whole compress/decompress call.
//! The variants fall into four groups: I/O failures, empty input, corrupt
//! archives, and internal invariant violations. The last group indicates a
//! bug in code table construction rather than bad input.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input source contained no bytes.
    #[error("Input is empty: nothing to compress")]
    EmptyInput,

    /// The input changed between the frequency scan and the encode pass.
    #[error("Input changed during compression: scanned {expected} bytes, found {actual}")]
    InputChanged {
        /// Byte count seen by the frequency scan.
        expected: u64,
        /// Byte count seen by the encode pass.
        actual: u64,
    },

    /// The archive ended while a tree marker, symbol, or subtree was expected.
    #[error("Truncated Huffman tree at offset {offset}")]
    TruncatedTree {
        /// Byte offset where more tree data was expected.
        offset: u64,
    },

    /// A tree marker byte was neither the leaf nor the internal marker.
    #[error("Invalid tree marker {marker:#04x} at offset {offset}")]
    InvalidTreeMarker {
        /// The unrecognized marker byte.
        marker: u8,
        /// Byte offset of the marker.
        offset: u64,
    },

    /// The serialized tree is well-formed but could never have been written by OxiHuff.
    #[error("Corrupt Huffman tree at offset {offset}: {message}")]
    CorruptTree {
        /// Byte offset where the problem was detected.
        offset: u64,
        /// Description of the problem.
        message: String,
    },

    /// Fewer than eight bytes were available for the original-size field.
    #[error("Truncated size field: expected 8 bytes, found {available}")]
    TruncatedSizeField {
        /// Number of size bytes actually present.
        available: usize,
    },

    /// The payload ran out before the declared number of bytes was decoded.
    #[error("Truncated payload: decoded {decoded} of {expected} bytes")]
    TruncatedPayload {
        /// Bytes decoded before the payload was exhausted.
        decoded: u64,
        /// Original size declared in the header.
        expected: u64,
    },

    /// A symbol had no entry in the code table.
    #[error("Internal error: no Huffman code for symbol {symbol:#04x}")]
    MissingCode {
        /// The symbol without a code.
        symbol: u8,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the rejected value.
        message: String,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create a truncated tree error.
    pub fn truncated_tree(offset: u64) -> Self {
        Self::TruncatedTree { offset }
    }

    /// Create an invalid tree marker error.
    pub fn invalid_marker(marker: u8, offset: u64) -> Self {
        Self::InvalidTreeMarker { marker, offset }
    }

    /// Create a corrupt tree error.
    pub fn corrupt_tree(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptTree {
            offset,
            message: message.into(),
        }
    }

    /// Create a truncated payload error.
    pub fn truncated_payload(decoded: u64, expected: u64) -> Self {
        Self::TruncatedPayload { decoded, expected }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if the error was caused by a damaged or truncated archive.
    pub fn is_corrupt_archive(&self) -> bool {
        matches!(
            self,
            Self::TruncatedTree { .. }
                | Self::InvalidTreeMarker { .. }
                | Self::CorruptTree { .. }
                | Self::TruncatedSizeField { .. }
                | Self::TruncatedPayload { .. }
        )
    }

    /// Returns `true` if the error indicates a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::MissingCode { .. })
    }
}
