//! Mesh alignment command-line tool.
//!
//! Fits one OBJ mesh into the bounding box of another, as described by a
//! JSON configuration file:
//!
//! ```json
//! {
//!   "object_to_move": "models/bolt.obj",
//!   "destination": "models/socket.obj",
//!   "rotation": { "x": 0, "y": 0, "z": 90 }
//! }
//! ```
//!
//! The aligned mesh is written to `patched/<name>_moved.obj` unless
//! `output` (or `--output`) says otherwise. Set `RUST_LOG` or pass `-v` for
//! pipeline logs.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mesh_align::align_mesh;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Scale, rotate and move an OBJ mesh into another mesh's bounding box
#[derive(Parser)]
#[command(name = "mesh-align")]
#[command(about = "Fit one OBJ mesh into the bounding box of another", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(name = "CONFIG")]
    config: PathBuf,

    /// Output file (overrides the configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for intermediate files (overrides the configuration)
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Log more detail (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut params = config::load(&cli.config)?;
    if let Some(output) = cli.output {
        params.output = Some(output);
    }
    if let Some(work_dir) = cli.work_dir {
        params.work_dir = Some(work_dir);
    }
    debug!(?params, "Loaded configuration");

    let report = align_mesh(&params).with_context(|| {
        format!(
            "failed to align {} into {}",
            params.object_to_move.display(),
            params.destination.display()
        )
    })?;

    println!("Scale factor: {}", report.scale);
    println!(
        "{} {}",
        "Final moved, scaled & rotated object saved to".bold(),
        report.output.display()
    );

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
