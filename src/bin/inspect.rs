//! Row Inspector Binary
//!
//! Loads a packed row image from a file and prints its blocks. All file I/O
//! happens here; the codec itself only sees in-memory buffers.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rowpack::{decode_block, RowIter};
use tracing_subscriber::{fmt, EnvFilter};

/// Inspect packed rows of length-prefixed blocks
#[derive(Parser, Debug)]
#[command(name = "rowpack-inspect")]
#[command(about = "Inspect packed rows of length-prefixed blocks")]
#[command(version)]
struct Args {
    /// File containing a packed row image
    file: PathBuf,

    /// Decode only the single block at this byte offset
    #[arg(short, long)]
    offset: Option<usize>,

    /// Maximum payload bytes to show per block
    #[arg(short, long, default_value = "16")]
    preview: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rowpack=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let row = match load_row(&args.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "rowpack-inspect v{}: loaded {} bytes from {}",
        rowpack::VERSION,
        row.len(),
        args.file.display()
    );

    let result = match args.offset {
        Some(offset) => inspect_one(&row, offset, args.preview),
        None => inspect_all(&row, args.preview),
    };

    if let Err(e) = result {
        tracing::error!("Inspection failed: {}", e);
        std::process::exit(1);
    }
}

/// Read a row image into memory
fn load_row(path: &Path) -> rowpack::Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Decode and print the single block at `offset`
fn inspect_one(row: &[u8], offset: usize, preview: usize) -> rowpack::Result<()> {
    let payload = decode_block(row, offset)?;
    println!(
        "block @ {}: {} payload bytes  {}",
        offset,
        payload.len(),
        hex_preview(payload, preview)
    );
    Ok(())
}

/// Walk the whole row and print every block
fn inspect_all(row: &[u8], preview: usize) -> rowpack::Result<()> {
    let mut count = 0;
    for (index, item) in RowIter::new(row).enumerate() {
        let (span, payload) = item?;
        println!(
            "#{:<4} [{:>8}, {:>8})  {:>8} payload bytes  {}",
            index,
            span.start,
            span.end,
            payload.len(),
            hex_preview(payload, preview)
        );
        count += 1;
    }
    println!("{} blocks, {} bytes total", count, row.len());
    Ok(())
}

/// First `max` payload bytes as hex, with a marker when truncated
fn hex_preview(payload: &[u8], max: usize) -> String {
    let shown = payload
        .iter()
        .take(max)
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(" ");

    if payload.len() > max {
        format!("{} ..", shown)
    } else {
        shown
    }
}
