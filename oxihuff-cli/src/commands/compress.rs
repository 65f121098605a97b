//! Compress command implementation.

use crate::utils::{BarProgress, compression_ratio, default_archive_path, file_size};
use oxihuff_core::CodecConfig;
use oxihuff_huffman::compress_file;
use std::path::Path;
use tracing::info;

pub fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    config: &CodecConfig,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| default_archive_path(input), Path::to_path_buf);

    let mut bar = BarProgress::new(progress);
    let stats = compress_file(input, &output, config, &mut bar)?;
    info!(
        distinct_symbols = stats.distinct_symbols,
        tree_bytes = stats.tree_bytes,
        payload_bytes = stats.payload_bytes,
        "compression finished"
    );

    let input_size = stats.input_size;
    let output_size = file_size(&output)?;

    println!("Compressed {} -> {}", input.display(), output.display());
    println!("Input size: {} bytes", input_size);
    println!("Output size: {} bytes", output_size);
    println!(
        "Compression ratio: {:.2}",
        compression_ratio(input_size, output_size)
    );

    Ok(())
}
