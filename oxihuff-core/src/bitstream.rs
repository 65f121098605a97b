//! MSB-first bit-level I/O.
//!
//! Huffman codes are packed most-significant-bit first: the first bit of a
//! code lands in bit 7 of the current output byte. This is the opposite of
//! the LSB-first ordering used by DEFLATE and LZH.
//!
//! Both types wrap ordinary `Read`/`Write` implementations and move data in
//! blocks of a configurable size, so the underlying I/O sees few large calls
//! regardless of how many single bits pass through.
//!
//! # Example
//!
//! ```
//! use oxihuff_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut writer = BitWriter::new(Vec::new());
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b1100, 4).unwrap();
//! let (output, padding) = writer.finish().unwrap();
//! assert_eq!(output, vec![0b1011_1000]);
//! assert_eq!(padding, 1);
//!
//! let mut reader = BitReader::new(Cursor::new(output));
//! assert_eq!(reader.read_bit().unwrap(), Some(true));
//! assert_eq!(reader.read_bit().unwrap(), Some(false));
//! ```

use crate::config::CodecConfig;
use crate::error::Result;
use std::io::{self, Read, Write};

/// MSB-first bit writer.
///
/// Call [`BitWriter::finish`] when done; it zero-pads the final partial byte
/// and flushes everything to the underlying writer. Dropping a writer without
/// finishing it discards buffered output.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Completed bytes not yet handed to `writer`.
    buffer: Vec<u8>,
    /// Flush threshold for `buffer`.
    capacity: usize,
    /// Byte being assembled (MSB-first).
    current: u8,
    /// Number of bits in `current` (0-7).
    bits_in_current: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` with the default block size.
    pub fn new(writer: W) -> Self {
        Self::with_capacity(writer, CodecConfig::DEFAULT.chunk_size)
    }

    /// Create a new `BitWriter` that hands bytes to `writer` in blocks of `capacity`.
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            writer,
            buffer: Vec::with_capacity(capacity),
            capacity,
            current: 0,
            bits_in_current: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Number of bits waiting in the partial byte (0-7).
    pub fn pending_bits(&self) -> u8 {
        self.bits_in_current
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.current = (self.current << 1) | bit as u8;
        self.bits_in_current += 1;
        self.total_bits_written += 1;

        if self.bits_in_current == 8 {
            self.push_byte()?;
        }
        Ok(())
    }

    /// Write the low `count` bits of `value`, highest bit first.
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    fn push_byte(&mut self) -> Result<()> {
        self.buffer.push(self.current);
        self.current = 0;
        self.bits_in_current = 0;

        if self.buffer.len() >= self.capacity {
            self.flush_buffer()?;
        }
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        Ok(())
    }

    /// Pad the final partial byte with zero bits, flush, and return the
    /// underlying writer together with the number of padding bits (0-7).
    pub fn finish(mut self) -> Result<(W, u8)> {
        let padding = if self.bits_in_current > 0 {
            let padding = 8 - self.bits_in_current;
            self.current <<= padding;
            self.buffer.push(self.current);
            self.current = 0;
            self.bits_in_current = 0;
            padding
        } else {
            0
        };

        self.flush_buffer()?;
        self.writer.flush()?;
        Ok((self.writer, padding))
    }
}

/// MSB-first bit reader.
///
/// Exhaustion is not an error at this level: [`BitReader::read_bit`] returns
/// `Ok(None)` and the caller decides whether the stream ended early.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Block of raw bytes read from `reader`.
    buffer: Vec<u8>,
    /// Next unread index in `buffer`.
    pos: usize,
    /// Number of valid bytes in `buffer`.
    filled: usize,
    /// Byte being consumed (MSB-first).
    current: u8,
    /// Unconsumed bits left in `current`.
    bits_left: u8,
    /// Total bits read.
    total_bits_read: u64,
    /// Total bytes taken from the stream.
    bytes_consumed: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` with the default block size.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, CodecConfig::DEFAULT.chunk_size)
    }

    /// Create a new `BitReader` that refills in blocks of `capacity` bytes.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; capacity.max(1)],
            pos: 0,
            filled: 0,
            current: 0,
            bits_left: 0,
            total_bits_read: 0,
            bytes_consumed: 0,
        }
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Bytes already buffered but not consumed are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Get the number of bytes that have been (at least partially) consumed.
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    fn refill(&mut self) -> io::Result<bool> {
        loop {
            match self.reader.read(&mut self.buffer) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Read a single bit, or `None` once the stream is exhausted.
    #[inline]
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.bits_left == 0 {
            if self.pos >= self.filled && !self.refill()? {
                return Ok(None);
            }
            self.current = self.buffer[self.pos];
            self.pos += 1;
            self.bits_left = 8;
            self.bytes_consumed += 1;
        }

        self.bits_left -= 1;
        self.total_bits_read += 1;
        Ok(Some((self.current >> self.bits_left) & 1 == 1))
    }

    /// Read `count` bits (at most 32), highest bit first.
    ///
    /// Returns `None` if the stream ends before all bits are read.
    pub fn read_bits(&mut self, count: u8) -> Result<Option<u32>> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        let mut value = 0u32;
        for _ in 0..count {
            match self.read_bit()? {
                Some(bit) => value = (value << 1) | bit as u32,
                None => return Ok(None),
            }
        }
        Ok(Some(value))
    }
}
