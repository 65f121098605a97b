//! # OxiHuff Huffman
//!
//! Pure Rust static Huffman compression of whole files.
//!
//! A compression run scans its input twice: the first pass counts byte
//! frequencies, from which a prefix code tree is built; the second pass
//! replaces every byte by its code. The tree travels in the archive header,
//! so decompression needs nothing but the archive.
//!
//! - [`frequency`]: byte histogram
//! - [`heap`]: min-heap with first-in-first-out tie-breaking
//! - [`tree`]: tree construction
//! - [`codes`]: code table derivation
//! - [`tree_codec`]: pre-order tree serialization
//! - [`encode`] / [`decode`]: bit stream coding
//! - [`archive`]: the archive container and file-level entry points
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_huffman::{compress, decompress};
//!
//! let archive = compress(b"aaaabbbcc").expect("compression failed");
//! assert_eq!(&archive[..8], b"01a01c1b");
//!
//! let restored = decompress(&archive).expect("decompression failed");
//! assert_eq!(restored, b"aaaabbbcc");
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! use oxihuff_core::{CodecConfig, NoProgress};
//! use oxihuff_huffman::compress_file;
//! use std::path::Path;
//!
//! let stats = compress_file(
//!     Path::new("input.txt"),
//!     Path::new("input.txt.huf"),
//!     &CodecConfig::DEFAULT,
//!     &mut NoProgress,
//! )?;
//! println!("Compression ratio: {:.2}", stats.ratio());
//! # Ok::<(), oxihuff_core::OxiHuffError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod archive;
pub mod codes;
pub mod decode;
pub mod encode;
pub mod frequency;
pub mod heap;
pub mod tree;
pub mod tree_codec;

// Re-exports
pub use archive::{
    ArchiveHeader, ArchiveInfo, CompressionStats, DecompressionStats, compress, compress_file,
    compress_stream, decompress, decompress_file, decompress_stream, inspect,
};
pub use codes::{Code, CodeTable, MAX_CODE_LENGTH};
pub use decode::HuffmanDecoder;
pub use encode::{EncodeSummary, HuffmanEncoder};
pub use frequency::FrequencyTable;
pub use heap::MinHeap;
pub use tree::{HuffmanTree, Node};
pub use tree_codec::{deserialize_tree, read_tree, serialize_tree, write_tree};
