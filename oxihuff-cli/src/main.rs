//! OxiHuff CLI - The Oxidized Huffman Codec
//!
//! A Pure Rust static Huffman file compressor.

mod utils;

use clap::{Parser, Subcommand};
use oxihuff_codec::HuffmanNode;
use oxihuff_core::bitstream::BitReader;
use std::fs;
use std::path::{Path, PathBuf};
use utils::create_progress_bar;

/// File extension used for compressed containers.
const CONTAINER_EXT: &str = "huf";

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(
    author,
    version,
    about = "The Oxidized Huffman Codec - Pure Rust file compressor"
)]
#[command(long_about = "
OxiHuff is a Pure Rust static Huffman file compressor.

Examples:
  oxihuff compress notes.txt
  oxihuff compress -o backup.huf notes.txt
  oxihuff decompress notes.txt.huf
  oxihuff info notes.txt.huf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        files: Vec<PathBuf>,

        /// Output file (defaults to <input>.huf; requires a single input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Decompress files
    #[command(alias = "x")]
    Decompress {
        /// Files to decompress
        files: Vec<PathBuf>,

        /// Output file (defaults to the input without .huf; requires a single input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Show information about a compressed container
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            files,
            output,
            verbose,
            progress,
        } => cmd_compress(&files, output.as_deref(), verbose, progress),
        Commands::Decompress {
            files,
            output,
            verbose,
            progress,
        } => cmd_decompress(&files, output.as_deref(), verbose, progress),
        Commands::Info { file } => cmd_info(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    files: &[PathBuf],
    output: Option<&Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Err("No files specified".into());
    }
    if output.is_some() && files.len() != 1 {
        return Err("--output requires exactly one input file".into());
    }

    let pb = create_progress_bar(files.len() as u64, progress);
    pb.set_message("files");

    for path in files {
        let data = fs::read(path)?;
        let compressed = oxihuff_codec::compress(&data)?;

        let out_path = match output {
            Some(out) => out.to_path_buf(),
            None => default_compressed_name(path),
        };
        write_atomic(&out_path, &compressed)?;

        if verbose {
            pb.println(format!(
                "  Compressed: {} ({} -> {} bytes, {:.1}%)",
                path.display(),
                data.len(),
                compressed.len(),
                ratio(data.len(), compressed.len())
            ));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    Ok(())
}

fn cmd_decompress(
    files: &[PathBuf],
    output: Option<&Path>,
    verbose: bool,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if files.is_empty() {
        return Err("No files specified".into());
    }
    if output.is_some() && files.len() != 1 {
        return Err("--output requires exactly one input file".into());
    }

    let pb = create_progress_bar(files.len() as u64, progress);
    pb.set_message("files");

    for path in files {
        let data = fs::read(path)?;
        let decompressed = oxihuff_codec::decompress(&data)?;

        let out_path = match output {
            Some(out) => out.to_path_buf(),
            None => default_decompressed_name(path)?,
        };
        write_atomic(&out_path, &decompressed)?;

        if verbose {
            pb.println(format!(
                "  Decompressed: {} ({} -> {} bytes)",
                path.display(),
                data.len(),
                decompressed.len()
            ));
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    Ok(())
}

fn cmd_info(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(file)?;

    println!("Container Information");
    println!("=====================");
    println!("File: {}", file.display());
    println!("Size: {} bytes", data.len());

    if data.is_empty() {
        println!("Empty container (compressed from empty input)");
        return Ok(());
    }

    let mut reader = BitReader::new(&data);
    let tree = HuffmanNode::deserialize(&mut reader)?;
    let tree_bits = reader.bit_position();

    reader.align_to_byte();
    let mut count_buf = [0u8; 4];
    reader.read_bytes(&mut count_buf)?;
    let count = u32::from_le_bytes(count_buf);

    let header_bytes = (tree_bits.div_ceil(8) + 4) as usize;

    println!();
    println!("Contents:");
    println!("  Distinct symbols: {}", tree.leaf_count());
    println!("  Tree size: {} bits", tree_bits);
    if tree.is_leaf() {
        println!("  Original size: {} bytes (single-symbol run)", count);
    } else {
        println!("  Payload bits: {}", count);
        println!("  Payload size: {} bytes", data.len() - header_bytes);
    }

    Ok(())
}

/// Default output name for compression: the input with `.huf` appended.
fn default_compressed_name(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(CONTAINER_EXT);
    PathBuf::from(name)
}

/// Default output name for decompression: the input without its `.huf`.
fn default_decompressed_name(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(CONTAINER_EXT) => Ok(path.with_extension("")),
        _ => Err(format!(
            "Cannot infer output name for {} (expected .{} extension); use --output",
            path.display(),
            CONTAINER_EXT
        )
        .into()),
    }
}

/// Write `data` to `path` via a temporary sibling swapped into place on
/// success, so a failed operation leaves no partial output behind.
fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

/// Percentage of space saved by compression.
fn ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}
