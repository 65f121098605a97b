//! Info command implementation.

use oxihuff_huffman::inspect;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON output structure for archive information.
#[derive(Debug, Serialize)]
struct InfoOutput {
    archive: String,
    archive_size: u64,
    distinct_symbols: usize,
    tree_depth: usize,
    header_size: u64,
    payload_size: u64,
    original_size: u64,
    compression_ratio: f64,
}

pub fn cmd_info(archive: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let archive_size = std::fs::metadata(archive)?.len();
    let mut reader = BufReader::new(File::open(archive)?);
    let info = inspect(&mut reader)?;

    let output = InfoOutput {
        archive: archive.display().to_string(),
        archive_size,
        distinct_symbols: info.leaf_count,
        tree_depth: info.depth,
        header_size: info.header_len,
        payload_size: archive_size.saturating_sub(info.header_len),
        original_size: info.original_size,
        compression_ratio: crate::utils::compression_ratio(info.original_size, archive_size),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Archive Information");
    println!("===================");
    println!("File: {}", output.archive);
    println!("Size: {} bytes", output.archive_size);
    println!();
    println!("Header:");
    println!("  Distinct symbols: {}", output.distinct_symbols);
    println!("  Tree depth: {}", output.tree_depth);
    println!("  Header size: {} bytes", output.header_size);
    println!("  Original size: {} bytes", output.original_size);
    println!("  Payload size: {} bytes", output.payload_size);
    println!("  Compression ratio: {:.2}", output.compression_ratio);

    Ok(())
}
