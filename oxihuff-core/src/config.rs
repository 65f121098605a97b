//! Codec configuration.
//!
//! The pipeline has no shared buffers: every stage allocates its own block
//! of `chunk_size` bytes for the duration of one run.

use crate::error::{OxiHuffError, Result};

/// Largest accepted block size (16 MiB).
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Tunable parameters for a compression or decompression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Size in bytes of each block read from the input and written to the output.
    pub chunk_size: usize,
    /// The decoder reports progress every `progress_interval` decoded bytes.
    pub progress_interval: u64,
}

impl CodecConfig {
    /// Default configuration.
    ///
    /// - 8 KiB blocks
    /// - decoder progress every 1024 bytes
    pub const DEFAULT: Self = Self {
        chunk_size: 8192,
        progress_interval: 1024,
    };

    /// Configuration for large files.
    ///
    /// - 64 KiB blocks
    /// - decoder progress every 64 KiB
    pub const LARGE_BUFFERS: Self = Self {
        chunk_size: 65536,
        progress_interval: 65536,
    };

    /// Create a configuration with the given block size.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Self::DEFAULT
        }
    }

    /// Set the decoder progress interval.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(OxiHuffError::invalid_config("chunk size must be non-zero"));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(OxiHuffError::invalid_config(format!(
                "chunk size {} exceeds the maximum of {MAX_CHUNK_SIZE} bytes",
                self.chunk_size
            )));
        }
        if self.progress_interval == 0 {
            return Err(OxiHuffError::invalid_config(
                "progress interval must be non-zero",
            ));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
