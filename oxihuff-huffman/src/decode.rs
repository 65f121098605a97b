//! Bit stream decoding.
//!
//! The decoder walks the tree one bit at a time (`0` = left, `1` = right) and
//! emits a symbol at every leaf. It stops as soon as the declared number of
//! bytes has been produced, so trailing padding bits are never consumed.

use crate::tree::{HuffmanTree, Node};
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::{BitReader, CodecConfig, Progress};
use std::io::{Read, Write};
use tracing::trace;

/// Huffman bit stream decoder.
#[derive(Debug)]
pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
    config: CodecConfig,
}

impl<'a> HuffmanDecoder<'a> {
    /// Create a decoder for the given tree.
    pub fn new(tree: &'a HuffmanTree, config: CodecConfig) -> Self {
        Self { tree, config }
    }

    /// Decode exactly `original_size` bytes from `reader` into `writer`.
    ///
    /// Returns the number of payload bytes consumed. Fails with
    /// [`OxiHuffError::TruncatedPayload`] if the bits run out first.
    ///
    /// When the root is itself a leaf, every bit yields that symbol; this
    /// mirrors the one-bit code the encoder assigns in that case.
    pub fn decode<R: Read, W: Write>(
        &self,
        reader: R,
        mut writer: W,
        original_size: u64,
        progress: &mut dyn Progress,
    ) -> Result<u64> {
        self.config.validate()?;

        let root = self.tree.root();
        let mut bits = BitReader::with_capacity(reader, self.config.chunk_size);
        let mut output = Vec::with_capacity(self.config.chunk_size);
        let mut decoded = 0u64;
        let mut node = root;

        while decoded < original_size {
            let bit = bits
                .read_bit()?
                .ok_or_else(|| OxiHuffError::truncated_payload(decoded, original_size))?;

            node = match node {
                Node::Internal { left, right } => {
                    if bit {
                        &**right
                    } else {
                        &**left
                    }
                }
                // Only reachable when the root is a leaf.
                Node::Leaf { .. } => node,
            };

            if let Node::Leaf { symbol } = node {
                output.push(*symbol);
                decoded += 1;
                node = root;

                if output.len() >= self.config.chunk_size {
                    writer.write_all(&output)?;
                    output.clear();
                    trace!(decoded, "flushed output block");
                }
                if decoded % self.config.progress_interval == 0 || decoded == original_size {
                    progress.update(decoded, original_size);
                }
            }
        }

        if !output.is_empty() {
            writer.write_all(&output)?;
        }
        writer.flush()?;

        Ok(bits.bytes_consumed())
    }

    /// Decode `original_size` bytes from an in-memory payload.
    pub fn decode_bytes(&self, payload: &[u8], original_size: u64) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.decode(payload, &mut out, original_size, &mut oxihuff_core::NoProgress)?;
        Ok(out)
    }
}
