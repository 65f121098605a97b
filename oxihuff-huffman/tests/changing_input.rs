//! Sources that change between the frequency scan and the encode pass.

use oxihuff_core::{CodecConfig, NoProgress, OxiHuffError};
use oxihuff_huffman::{compress_stream, decompress};
use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// Yields `before` until the first rewind, then `after`.
struct ShiftingSource {
    current: Cursor<Vec<u8>>,
    after: Option<Vec<u8>>,
}

impl ShiftingSource {
    fn new(before: &[u8], after: &[u8]) -> Self {
        Self {
            current: Cursor::new(before.to_vec()),
            after: Some(after.to_vec()),
        }
    }
}

impl Read for ShiftingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.current.read(buf)
    }
}

impl Seek for ShiftingSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if let Some(after) = self.after.take() {
            self.current = Cursor::new(after);
        }
        self.current.seek(pos)
    }
}

fn compress_changing(before: &[u8], after: &[u8]) -> oxihuff_core::Result<Vec<u8>> {
    let mut out = Vec::new();
    compress_stream(
        ShiftingSource::new(before, after),
        &mut out,
        &CodecConfig::new(4),
        &mut NoProgress,
    )?;
    Ok(out)
}

#[test]
fn test_grown_with_unseen_symbol() {
    let err = compress_changing(b"aaaabbbcc", b"aaaabbbccz").unwrap_err();
    assert!(matches!(
        err,
        OxiHuffError::InputChanged {
            expected: 9,
            actual: 10
        }
    ));
    assert!(!err.is_internal());
}

#[test]
fn test_grown_with_known_symbols() {
    let err = compress_changing(b"aaaabbbcc", b"aaaabbbccabc").unwrap_err();
    assert!(matches!(
        err,
        OxiHuffError::InputChanged {
            expected: 9,
            actual: 12
        }
    ));
}

#[test]
fn test_shrunk() {
    let err = compress_changing(b"aaaabbbcc", b"aaaab").unwrap_err();
    assert!(matches!(
        err,
        OxiHuffError::InputChanged {
            expected: 9,
            actual: 5
        }
    ));
}

#[test]
fn test_same_length_unseen_symbol() {
    let err = compress_changing(b"aaaabbbcc", b"aaxabbbcc").unwrap_err();
    assert!(matches!(
        err,
        OxiHuffError::InputChanged {
            expected: 9,
            actual: 9
        }
    ));
    assert!(!err.is_internal());
}

#[test]
fn test_unchanged_source() {
    let archive = compress_changing(b"aaaabbbcc", b"aaaabbbcc").unwrap();
    assert_eq!(decompress(&archive).unwrap(), b"aaaabbbcc");
}
