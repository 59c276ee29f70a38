//! Offline address refresh.
//!
//! Reads a CSV export of user locations, recomputes each address, and
//! writes the updated table for re-import.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use regiondex::batch::{read_csv, refresh, write_csv, RefreshMode};
use regiondex::config::Config;

#[derive(Parser, Debug)]
#[command(name = "relabel")]
#[command(about = "Recompute stored user addresses from coordinates")]
struct Args {
    /// CSV file with columns id,name,latitude,longitude,address
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// nearest, coordinates or stale
    #[arg(long, default_value = "nearest")]
    mode: RefreshMode,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in gazetteer: districts or provinces (overrides config)
    #[arg(long)]
    gazetteer: Option<String>,

    /// Report changes without writing output
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(gazetteer) = args.gazetteer {
        config.resolver.gazetteer = gazetteer;
    }
    let resolver = config.resolver().context("Invalid resolver configuration")?;

    info!("Reading user locations from {}", args.input.display());
    let file = File::open(&args.input).context("Failed to open input file")?;
    let records = read_csv(BufReader::new(file)).context("Failed to read input CSV")?;

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("resolving");

    let report = refresh(&resolver, records, args.mode);
    pb.set_position(report.total_users as u64);
    pb.finish_with_message("done");

    for change in &report.updates {
        info!("{}", change);
    }
    info!(
        "{} of {} users updated, {} without coordinates",
        report.updated_users, report.total_users, report.skipped_users
    );

    if args.dry_run {
        info!("Dry run, no output written");
        return Ok(());
    }

    match args.output {
        Some(path) => {
            let file = File::create(&path).context("Failed to create output file")?;
            write_csv(BufWriter::new(file), &report.records)?;
            info!("Wrote {} records to {}", report.records.len(), path.display());
        }
        None => write_csv(io::stdout().lock(), &report.records)?,
    }

    Ok(())
}
