// src/main.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use textpack::{Algorithm, compress, logger, utils};

#[derive(Parser)]
#[command(name = "textpack", version = "0.1")]
#[command(about = "Lossless text compression with Huffman and LZW codecs.", long_about = None)]
struct Cli {
    /// Show codec internals (tree and dictionary statistics)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum AlgorithmArg {
    #[clap(help = "Static prefix codes built from symbol frequencies (Default).")]
    Huffman,
    #[clap(help = "Adaptive dictionary, 16-bit codes.")]
    Lzw,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Huffman => Algorithm::Huffman,
            AlgorithmArg::Lzw => Algorithm::Lzw,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file (writes <stem>.bin by default)
    Compress {
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Huffman)]
        algorithm: AlgorithmArg,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a file (writes <stem>_decompressed.txt by default)
    Decompress {
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Huffman)]
        algorithm: AlgorithmArg,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compress and decompress in memory and check the result matches
    Roundtrip {
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Huffman)]
        algorithm: AlgorithmArg,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    match cli.command {
        Commands::Compress { input, algorithm, output } => {
            let output = output.unwrap_or_else(|| utils::compressed_path(&input));
            compress_file(&input, &output, algorithm.into())
        }
        Commands::Decompress { input, algorithm, output } => {
            let output = output.unwrap_or_else(|| utils::decompressed_path(&input));
            decompress_file(&input, &output, algorithm.into())
        }
        Commands::Roundtrip { input, algorithm } => roundtrip_file(&input, algorithm.into()),
    }
}

fn compress_file(input: &Path, output: &Path, algorithm: Algorithm) -> anyhow::Result<()> {
    let data = utils::read_file(input).with_context(|| format!("reading {}", input.display()))?;
    let compressed = compress::compress(&data, algorithm)
        .with_context(|| format!("{algorithm} compression of {}", input.display()))?;
    utils::write_file(output, &compressed)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        "Compressed {} ({}) -> {} ({}, {:.1}%)",
        input.display(),
        utils::format_bytes(data.len()),
        output.display(),
        utils::format_bytes(compressed.len()),
        utils::compression_ratio(data.len(), compressed.len())
    );
    Ok(())
}

fn decompress_file(input: &Path, output: &Path, algorithm: Algorithm) -> anyhow::Result<()> {
    let data = utils::read_file(input).with_context(|| format!("reading {}", input.display()))?;
    let decompressed = compress::decompress(&data, algorithm)
        .with_context(|| format!("{algorithm} decompression of {}", input.display()))?;
    utils::write_file(output, &decompressed)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        "Decompressed {} -> {} ({})",
        input.display(),
        output.display(),
        utils::format_bytes(decompressed.len())
    );
    Ok(())
}

fn roundtrip_file(input: &Path, algorithm: Algorithm) -> anyhow::Result<()> {
    let data = utils::read_file(input).with_context(|| format!("reading {}", input.display()))?;
    let compressed = compress::compress(&data, algorithm)?;
    let restored = compress::decompress(&compressed, algorithm)?;

    if restored != data {
        bail!(
            "{algorithm} round trip mismatch: {} bytes in, {} bytes out",
            data.len(),
            restored.len()
        );
    }

    info!(
        "{algorithm}: {} -> {} ({:.1}%), round trip ok",
        utils::format_bytes(data.len()),
        utils::format_bytes(compressed.len()),
        utils::compression_ratio(data.len(), compressed.len())
    );
    Ok(())
}
