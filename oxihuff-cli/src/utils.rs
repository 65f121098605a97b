//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use oxihuff_core::{Phase, Progress};
use std::path::{Path, PathBuf};

/// Extension given to archives when no output name is supplied.
pub const ARCHIVE_EXTENSION: &str = "huf";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░ ");
    pb.set_style(style);
    pb
}

/// Drives one progress bar per pipeline phase.
pub struct BarProgress {
    bar: ProgressBar,
    enabled: bool,
}

impl BarProgress {
    pub fn new(enabled: bool) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            enabled,
        }
    }
}

impl Progress for BarProgress {
    fn begin(&mut self, phase: Phase, total: u64) {
        self.bar = create_progress_bar(total, self.enabled);
        self.bar.set_message(phase.to_string());
    }

    fn update(&mut self, processed: u64, total: u64) {
        self.bar.set_length(total);
        self.bar.set_position(processed);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Default archive name: `<input>.huf`.
pub fn default_archive_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(ARCHIVE_EXTENSION);
    PathBuf::from(name)
}

/// Default output name: the archive name without `.huf`, else `<archive>.out`.
pub fn default_output_path(archive: &Path) -> PathBuf {
    match archive.extension() {
        Some(ext) if ext == ARCHIVE_EXTENSION => archive.with_extension(""),
        _ => {
            let mut name = archive.as_os_str().to_owned();
            name.push(".out");
            PathBuf::from(name)
        }
    }
}

/// Size of a file on disk.
pub fn file_size(path: &Path) -> std::io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

/// Input size divided by output size, or 0 when the output is empty.
pub fn compression_ratio(input_size: u64, output_size: u64) -> f64 {
    if output_size == 0 {
        return 0.0;
    }
    input_size as f64 / output_size as f64
}
