//! Decompress command implementation.

use crate::utils::{BarProgress, default_output_path};
use oxihuff_core::CodecConfig;
use oxihuff_huffman::decompress_file;
use std::path::Path;

pub fn cmd_decompress(
    archive: &Path,
    output: Option<&Path>,
    config: &CodecConfig,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map_or_else(|| default_output_path(archive), Path::to_path_buf);

    let mut bar = BarProgress::new(progress);
    let stats = decompress_file(archive, &output, config, &mut bar)?;

    println!("Decompressed {} -> {}", archive.display(), output.display());
    println!("Output size: {} bytes", stats.output_size);

    Ok(())
}
