//! Bit stream encoding.
//!
//! Each input byte is replaced by its code, packed MSB-first. The last byte
//! is right-padded with zero bits; the decoder stops on the declared size and
//! never looks at the padding.

use crate::codes::CodeTable;
use oxihuff_core::error::Result;
use oxihuff_core::{BitWriter, CodecConfig, Progress};
use std::io::{self, Read, Write};
use tracing::trace;

/// Outcome of one encoding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Bytes read from the input.
    pub input_bytes: u64,
    /// Bytes of packed payload written.
    pub payload_bytes: u64,
    /// Zero bits appended to complete the final byte (0-7).
    pub padding_bits: u8,
}

/// Huffman bit stream encoder.
#[derive(Debug)]
pub struct HuffmanEncoder<'a> {
    codes: &'a CodeTable,
    config: CodecConfig,
}

impl<'a> HuffmanEncoder<'a> {
    /// Create an encoder for the given code table.
    pub fn new(codes: &'a CodeTable, config: CodecConfig) -> Self {
        Self { codes, config }
    }

    /// Encode everything `reader` yields into `writer`.
    ///
    /// `total` is the expected input length, used only for progress reports.
    /// A byte without a code is an internal error
    /// ([`oxihuff_core::OxiHuffError::MissingCode`]): the table must come from
    /// a tree built over the same input.
    pub fn encode<R: Read, W: Write>(
        &self,
        mut reader: R,
        writer: W,
        total: u64,
        progress: &mut dyn Progress,
    ) -> Result<EncodeSummary> {
        self.config.validate()?;

        let mut bits = BitWriter::with_capacity(writer, self.config.chunk_size);
        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut input_bytes = 0u64;

        loop {
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            for &byte in &buffer[..n] {
                let code = self.codes.require(byte)?;
                for bit in code.bits() {
                    bits.write_bit(bit)?;
                }
            }

            input_bytes += n as u64;
            trace!(chunk = n, bits = bits.bits_written(), "encoded chunk");
            progress.update(input_bytes, total.max(input_bytes));
        }

        let payload_bytes = bits.bits_written().div_ceil(8);
        let (_, padding_bits) = bits.finish()?;

        Ok(EncodeSummary {
            input_bytes,
            payload_bytes,
            padding_bits,
        })
    }

    /// Encode an in-memory buffer into a new payload vector.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(
            data,
            &mut out,
            data.len() as u64,
            &mut oxihuff_core::NoProgress,
        )?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;

    fn codes_for(data: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyTable::from_bytes(data)).unwrap())
    }

    #[test]
    fn test_encode_literal_example() {
        let data = b"aaaabbbcc";
        let codes = codes_for(data);
        // a=0 b=11 c=10: 0000 111111 1010 -> 00001111 111010[00]
        let payload = HuffmanEncoder::new(&codes, CodecConfig::DEFAULT)
            .encode_bytes(data)
            .unwrap();
        assert_eq!(payload, vec![0b0000_1111, 0b1110_1000]);
    }

    #[test]
    fn test_encode_summary() {
        let data = b"aaaabbbcc";
        let codes = codes_for(data);
        let mut out = Vec::new();
        let summary = HuffmanEncoder::new(&codes, CodecConfig::new(4))
            .encode(&data[..], &mut out, 9, &mut oxihuff_core::NoProgress)
            .unwrap();
        assert_eq!(summary.input_bytes, 9);
        assert_eq!(summary.payload_bytes, 2);
        assert_eq!(summary.padding_bits, 2);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_encode_single_symbol() {
        let data = [0x41u8; 20];
        let codes = codes_for(&data);
        let payload = HuffmanEncoder::new(&codes, CodecConfig::DEFAULT)
            .encode_bytes(&data)
            .unwrap();
        // 20 zero bits -> 3 bytes
        assert_eq!(payload, vec![0, 0, 0]);
    }

    #[test]
    fn test_encode_reports_progress_per_chunk() {
        let data = vec![b'x'; 10];
        let codes = codes_for(&data);
        let mut seen = Vec::new();
        let mut sink = |processed: u64, total: u64| seen.push((processed, total));
        HuffmanEncoder::new(&codes, CodecConfig::new(4))
            .encode(&data[..], std::io::sink(), 10, &mut sink)
            .unwrap();
        assert_eq!(seen, vec![(4, 10), (8, 10), (10, 10)]);
    }

    #[test]
    fn test_encode_missing_symbol() {
        let codes = codes_for(b"abc");
        let err = HuffmanEncoder::new(&codes, CodecConfig::DEFAULT)
            .encode_bytes(b"abz")
            .unwrap_err();
        assert!(err.is_internal());
    }
}
