//! OxiHuff CLI - static Huffman file compression
//!
//! Compresses a single file into a self-describing Huffman archive and back.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_completions, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use oxihuff_core::CodecConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(author, version, about = "Static Huffman file compressor")]
#[command(long_about = "
OxiHuff compresses a file with a Huffman code built from its own byte
frequencies. The tree is stored in the archive, so nothing else is needed
to restore the original.

Examples:
  oxihuff compress notes.txt
  oxihuff compress notes.txt notes.huf
  oxihuff decompress notes.huf notes.txt
  oxihuff test notes.huf
  oxihuff info --json notes.huf
  oxihuff completions bash
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Size in bytes of each read/write block
    #[arg(long, global = true, default_value_t = CodecConfig::DEFAULT.chunk_size)]
    chunk_size: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Archive to write (defaults to <input>.huf)
        output: Option<PathBuf>,
    },

    /// Decompress an archive
    #[command(alias = "d")]
    Decompress {
        /// Archive to decompress
        archive: PathBuf,

        /// File to write (defaults to the archive name without .huf)
        output: Option<PathBuf>,
    },

    /// Show information about an archive
    #[command(alias = "i")]
    Info {
        /// Archive file to inspect
        archive: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Test archive integrity
    #[command(alias = "t")]
    Test {
        /// Archive file to test
        archive: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(log_level: &str, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        match log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.verbose);

    let config = CodecConfig::new(cli.chunk_size);
    let progress = !cli.quiet;

    let result = match cli.command {
        Commands::Compress { input, output } => {
            cmd_compress(&input, output.as_deref(), &config, progress)
        }
        Commands::Decompress { archive, output } => {
            cmd_decompress(&archive, output.as_deref(), &config, progress)
        }
        Commands::Info { archive, json } => cmd_info(&archive, json),
        Commands::Test { archive } => cmd_test(&archive, &config, progress),
        Commands::Completions { shell } => cmd_completions(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
