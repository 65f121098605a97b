//! Archive container and entry operations.
//!
//! ```text
//! ┌──────────────────────┬────────────────────────┬──────────────────────────┐
//! │ tree (pre-order)     │ original size (8 bytes)│ payload (MSB-first bits) │
//! │ '0' internal         │ native-endian u64      │ zero-padded to a byte    │
//! │ '1' + symbol leaf    │                        │                          │
//! └──────────────────────┴────────────────────────┴──────────────────────────┘
//! ```
//!
//! The size field uses the host's byte order, so archives are only portable
//! between machines of the same endianness.

use crate::codes::CodeTable;
use crate::decode::HuffmanDecoder;
use crate::encode::HuffmanEncoder;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use crate::tree_codec::{read_tree, serialized_len, write_tree};
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::{CodecConfig, NoProgress, Phase, Progress};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Length of the original-size field.
pub const SIZE_FIELD_LEN: usize = 8;

/// Everything that precedes the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// The Huffman tree used for the payload.
    pub tree: HuffmanTree,
    /// Number of bytes the payload decodes to.
    pub original_size: u64,
}

impl ArchiveHeader {
    /// Read the tree and the size field.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let tree = read_tree(reader)?;

        let mut size = [0u8; SIZE_FIELD_LEN];
        let available = read_up_to(reader, &mut size)?;
        if available < SIZE_FIELD_LEN {
            return Err(OxiHuffError::TruncatedSizeField { available });
        }

        Ok(Self {
            tree,
            original_size: u64::from_ne_bytes(size),
        })
    }

    /// Write the tree and the size field; returns the header length.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<u64> {
        write_tree(&self.tree, writer)?;
        writer.write_all(&self.original_size.to_ne_bytes())?;
        Ok(self.encoded_len())
    }

    /// Length of the header in bytes.
    pub fn encoded_len(&self) -> u64 {
        serialized_len(&self.tree) + SIZE_FIELD_LEN as u64
    }
}

fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Statistics of a compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Bytes of original input.
    pub input_size: u64,
    /// Bytes of archive written (header + payload).
    pub output_size: u64,
    /// Bytes taken by the serialized tree.
    pub tree_bytes: u64,
    /// Bytes taken by the packed payload.
    pub payload_bytes: u64,
    /// Number of distinct byte values in the input.
    pub distinct_symbols: usize,
}

impl CompressionStats {
    /// Input size divided by output size.
    pub fn ratio(&self) -> f64 {
        if self.output_size == 0 {
            return 0.0;
        }
        self.input_size as f64 / self.output_size as f64
    }

    /// Space saved, as a percentage of the input size (negative if the archive grew).
    pub fn space_savings(&self) -> f64 {
        if self.input_size == 0 {
            return 0.0;
        }
        (1.0 - self.output_size as f64 / self.input_size as f64) * 100.0
    }
}

/// Statistics of a decompression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressionStats {
    /// Bytes of archive consumed (header + payload).
    pub archive_size: u64,
    /// Bytes of output produced.
    pub output_size: u64,
}

/// Header summary of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Number of leaves (distinct symbols) in the tree.
    pub leaf_count: usize,
    /// Depth of the tree (0 when the root is a leaf).
    pub depth: usize,
    /// Bytes taken by the tree and the size field.
    pub header_len: u64,
    /// Declared original size.
    pub original_size: u64,
}

/// Write the header and the payload for an already scanned input.
///
/// The encoder reads at most the scanned byte count. Any byte left over, a
/// short read, or a symbol missing from the tree means the source changed
/// after the scan and is reported as [`OxiHuffError::InputChanged`].
fn write_archive<R: Read, W: Write>(
    frequencies: &FrequencyTable,
    mut reader: R,
    writer: &mut W,
    config: &CodecConfig,
    progress: &mut dyn Progress,
) -> Result<CompressionStats> {
    let tree = HuffmanTree::build(frequencies)?;
    let codes = CodeTable::from_tree(&tree);
    let expected = frequencies.total();

    let header = ArchiveHeader {
        tree,
        original_size: expected,
    };
    let header_len = header.write_to(writer)?;
    debug!(
        header_len,
        original_size = header.original_size,
        "header written"
    );

    progress.begin(Phase::Encoding, expected);
    let mut limited = reader.by_ref().take(expected);
    let encoded = HuffmanEncoder::new(&codes, *config).encode(
        &mut limited,
        &mut *writer,
        expected,
        progress,
    );
    let consumed = expected - limited.limit();

    let summary = match encoded {
        Ok(summary) => summary,
        Err(OxiHuffError::MissingCode { symbol }) => {
            let actual = consumed + io::copy(&mut reader, &mut io::sink())?;
            debug!(symbol, "symbol absent from the scan");
            return Err(OxiHuffError::InputChanged { expected, actual });
        }
        Err(e) => return Err(e),
    };
    progress.finish();

    let actual = summary.input_bytes + io::copy(&mut reader, &mut io::sink())?;
    if actual != expected {
        return Err(OxiHuffError::InputChanged { expected, actual });
    }

    let stats = CompressionStats {
        input_size: frequencies.total(),
        output_size: header_len + summary.payload_bytes,
        tree_bytes: header_len - SIZE_FIELD_LEN as u64,
        payload_bytes: summary.payload_bytes,
        distinct_symbols: frequencies.distinct_symbols(),
    };
    if stats.output_size >= stats.input_size {
        warn!(
            input_size = stats.input_size,
            output_size = stats.output_size,
            "archive is not smaller than its input"
        );
    }
    Ok(stats)
}

/// Compress a seekable source: scan it, rewind, and encode it into `writer`.
pub fn compress_stream<R: Read + Seek, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &CodecConfig,
    progress: &mut dyn Progress,
) -> Result<CompressionStats> {
    config.validate()?;

    progress.begin(Phase::Scanning, 0);
    let frequencies = FrequencyTable::from_reader(&mut reader, config, progress)?;
    progress.finish();

    reader.seek(SeekFrom::Start(0))?;
    let stats = write_archive(&frequencies, reader, &mut writer, config, progress)?;
    writer.flush()?;
    Ok(stats)
}

/// Compress the file at `input` into a new archive at `output`.
///
/// The input is read twice: once to count frequencies and once to encode.
/// An empty input is rejected before `output` is created. If a later step
/// fails, a partially written `output` is left in place.
pub fn compress_file(
    input: &Path,
    output: &Path,
    config: &CodecConfig,
    progress: &mut dyn Progress,
) -> Result<CompressionStats> {
    config.validate()?;

    let mut source = File::open(input)?;
    let input_len = source.metadata()?.len();

    progress.begin(Phase::Scanning, input_len);
    let frequencies = FrequencyTable::from_reader(&mut source, config, progress)?;
    progress.finish();

    source.seek(SeekFrom::Start(0))?;
    let mut writer = BufWriter::with_capacity(config.chunk_size, File::create(output)?);
    let stats = write_archive(&frequencies, source, &mut writer, config, progress)?;
    writer.flush()?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        input_size = stats.input_size,
        output_size = stats.output_size,
        "compressed file"
    );
    Ok(stats)
}

/// Decompress an archive from `reader` into `writer`.
pub fn decompress_stream<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    config: &CodecConfig,
    progress: &mut dyn Progress,
) -> Result<DecompressionStats> {
    config.validate()?;

    let header = ArchiveHeader::read_from(&mut reader)?;
    debug!(
        leaves = header.tree.leaf_count(),
        original_size = header.original_size,
        "header read"
    );

    progress.begin(Phase::Decoding, header.original_size);
    let payload_bytes = HuffmanDecoder::new(&header.tree, *config).decode(
        reader,
        writer,
        header.original_size,
        progress,
    )?;
    progress.finish();

    Ok(DecompressionStats {
        archive_size: header.encoded_len() + payload_bytes,
        output_size: header.original_size,
    })
}

/// Decompress the archive at `input` into a new file at `output`.
///
/// `output` is created before the archive is validated; on failure it may
/// hold partial output.
pub fn decompress_file(
    input: &Path,
    output: &Path,
    config: &CodecConfig,
    progress: &mut dyn Progress,
) -> Result<DecompressionStats> {
    config.validate()?;

    let reader = BufReader::with_capacity(config.chunk_size, File::open(input)?);
    let writer = BufWriter::with_capacity(config.chunk_size, File::create(output)?);
    let stats = decompress_stream(reader, writer, config, progress)?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        output_size = stats.output_size,
        "decompressed file"
    );
    Ok(stats)
}

/// Compress an in-memory buffer into a new archive.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let frequencies = FrequencyTable::from_bytes(data);
    if frequencies.is_empty() {
        return Err(OxiHuffError::EmptyInput);
    }

    let mut out = Vec::new();
    write_archive(
        &frequencies,
        data,
        &mut out,
        &CodecConfig::DEFAULT,
        &mut NoProgress,
    )?;
    Ok(out)
}

/// Decompress an in-memory archive.
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decompress_stream(
        Cursor::new(archive),
        &mut out,
        &CodecConfig::DEFAULT,
        &mut NoProgress,
    )?;
    Ok(out)
}

/// Read only the header of an archive and summarize it.
pub fn inspect<R: Read>(reader: &mut R) -> Result<ArchiveInfo> {
    let header = ArchiveHeader::read_from(reader)?;
    Ok(ArchiveInfo {
        leaf_count: header.tree.leaf_count(),
        depth: header.tree.depth(),
        header_len: header.encoded_len(),
        original_size: header.original_size,
    })
}
