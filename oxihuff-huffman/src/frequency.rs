//! Symbol frequency counting.

use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::{CodecConfig, Progress};
use std::io::{self, Read};
use tracing::{debug, trace};

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Occurrence count of every byte value in an input.
///
/// The sum of all counts always equals [`FrequencyTable::total`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: [0; SYMBOL_COUNT],
            total: 0,
        }
    }

    /// Count the symbols of an in-memory buffer.
    ///
    /// Unlike [`FrequencyTable::from_reader`], an empty buffer is not an error
    /// here; the table simply stays empty.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.add_bytes(data);
        table
    }

    /// Scan a reader once in blocks of `config.chunk_size` bytes.
    ///
    /// Returns [`OxiHuffError::EmptyInput`] if the reader yields no bytes.
    pub fn from_reader<R: Read>(
        mut reader: R,
        config: &CodecConfig,
        progress: &mut dyn Progress,
    ) -> Result<Self> {
        config.validate()?;

        let mut table = Self::new();
        let mut buffer = vec![0u8; config.chunk_size];

        loop {
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            table.add_bytes(&buffer[..n]);
            trace!(chunk = n, total = table.total, "scanned chunk");
            progress.update(table.total, table.total);
        }

        if table.is_empty() {
            return Err(OxiHuffError::EmptyInput);
        }

        debug!(
            total_bytes = table.total,
            distinct_symbols = table.distinct_symbols(),
            "histogram built"
        );
        Ok(table)
    }

    /// Add every byte of `data` to the table.
    pub fn add_bytes(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Occurrence count of `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns `true` if no bytes were counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate over `(symbol, count)` for symbols that occur, in symbol order.
    pub fn iter_present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(symbol, &c)| (symbol as u8, c))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
