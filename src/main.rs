//! Map marker clustering tool
//!
//! Reads places from a CSV file, groups them into clusters for the given map
//! zoom level, and writes one record per marker or cluster badge.

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cluster;
mod output;
mod places;

#[cfg(test)]
mod output_test;

use cluster::marker_cluster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "rust_markercluster")]
#[command(about = "Map marker clustering tool", long_about = None)]
struct Args {
    /// Input CSV file with latitude,longitude columns
    #[arg(short, long, default_value = "places.csv")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Map zoom level, lower is more zoomed in; below 5 nothing is merged
    #[arg(short, long, default_value_t = 8, allow_negative_numbers = true)]
    zoom: i32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so results on stdout stay machine readable
///
/// `RUST_LOG` takes precedence over the `--debug` flag.
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let points = places::load_places(&args.input)
        .with_context(|| format!("reading places from {:?}", args.input))?;

    if points.is_empty() {
        bail!("no places found in {:?}", args.input);
    }
    info!(points = points.len(), input = ?args.input, "loaded places");

    let clusters = marker_cluster(&points, args.zoom);

    let merged = clusters.iter().filter(|c| c.is_cluster).count();
    let placed: usize = clusters.iter().map(|c| c.count()).sum();
    info!(
        zoom = args.zoom,
        markers = clusters.len(),
        clusters = merged,
        dropped = points.len() - placed,
        "clustered places"
    );

    match &args.output {
        None => write(io::stdout().lock(), args.format, &clusters, &points)
            .context("writing to stdout")?,
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {:?}", path))?;
            write(BufWriter::new(file), args.format, &clusters, &points)
                .with_context(|| format!("writing {:?}", path))?;
            info!(output = ?path, "clusters written");
        }
    }

    Ok(())
}

fn write<W: io::Write>(
    out: W,
    format: Format,
    clusters: &[cluster::Cluster],
    points: &[cluster::Point],
) -> anyhow::Result<()> {
    match format {
        Format::Csv => output::write_csv(out, clusters, points),
        Format::Json => output::write_json(out, clusters, points),
    }
}
