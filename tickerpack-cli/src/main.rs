//! TickerPack CLI — download daily closing prices and emit a dataset manifest.
//!
//! Example:
//!   tickerpack --ticker WIPRO.NS --start 366 --end 1
//!
//! Fetches WIPRO.NS closes for roughly the last year, writes
//! `data/WIPRO.NS.csv`, and overwrites `jobs/data_upload.yml` with the
//! dataset manifest for the upload pipeline. Milestones are appended to
//! `logs/data_download.log`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tickerpack_core::{run_export, ExportPaths, ExportRequest, YahooProvider};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tickerpack",
    about = "Download daily closing prices for a ticker and emit a YAML dataset manifest"
)]
struct Cli {
    /// Ticker symbol with exchange suffix (e.g. WIPRO.NS).
    #[arg(short = 't', long)]
    ticker: String,

    /// Days before today marking the window start (e.g. 366).
    #[arg(short = 's', long)]
    start: u32,

    /// Days before today marking the window end (e.g. 1).
    #[arg(short = 'e', long)]
    end: u32,

    /// Directory for CSV output.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory for the manifest.
    #[arg(long, default_value = "jobs")]
    jobs_dir: PathBuf,

    /// Directory for the log file.
    #[arg(long, default_value = "logs")]
    logs_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExportPaths::new(cli.data_dir, cli.jobs_dir, cli.logs_dir);
    paths.ensure()?;

    // Append-only file log; the guard must outlive the run so buffered
    // lines are flushed on exit.
    let appender = tracing_appender::rolling::never(
        paths.logs_dir(),
        tickerpack_core::paths::LOG_FILENAME,
    );
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let request = ExportRequest {
        ticker: cli.ticker,
        start_offset: cli.start,
        end_offset: cli.end,
        anchor: chrono::Local::now().date_naive(),
    };

    let provider = YahooProvider::new();
    let report = run_export(&provider, &paths, &request)?;

    println!("completed");
    println!(
        "{} rows -> {} (manifest: {})",
        report.rows,
        report.csv_path.display(),
        report.manifest_path.display()
    );

    Ok(())
}
