//! # OxiHuff Core
//!
//! Core components shared by the OxiHuff crates:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-length codes
//! - [`config`]: Block sizes and progress cadence
//! - [`progress`]: Progress notification sink
//! - [`error`]: Error types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     oxihuff compress / decompress / info / test         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Frequency scan, tree build, tree codec, bit coding  │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, CodecConfig, Progress          │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod config;
pub mod error;
pub mod progress;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use config::{CodecConfig, MAX_CHUNK_SIZE};
pub use error::{OxiHuffError, Result};
pub use progress::{NoProgress, Phase, Progress};
