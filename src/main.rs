use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mlb_report_gen::config::Config;
use mlb_report_gen::render::PdfRenderer;
use mlb_report_gen::report::Reporter;
use mlb_report_gen::storage::FsStore;
use mlb_report_gen::util::statsapi::{StatsApi, UreqFetcher};
use mlb_report_gen::util::today;

/// Watches the day's schedule and prints lineup cards for watched games once they go live.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Append the live-feed url to every report and status line
    #[arg(long)]
    debug: bool,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Config file to use instead of the per-user one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = main0(Args::parse()) {
        error!("Error while generating reports: {e:#}");
        std::process::exit(1);
    }
}

fn main0(args: Args) -> Result<()> {
    let path = match args.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_or_create(&path)?;
    let interval = Duration::from_secs(config.poll_seconds.max(1));
    let api = StatsApi::new(Box::new(UreqFetcher::new()), &config.stats_base_url, &config.standings_url);
    let store = FsStore::new(&config.report_path);
    let mut reporter = Reporter::new(api, Box::new(store), Box::new(PdfRenderer), config, args.debug);

    info!("Watching {} teams every {}s", reporter.config().effective_watch_teams().len(), interval.as_secs());
    loop {
        let started = Instant::now();
        let summary = reporter.run_cycle(today());
        if !summary.written.is_empty() {
            info!("Wrote {} artifacts", summary.written.len());
        }
        if args.once {
            return Ok(());
        }
        std::thread::sleep(interval.saturating_sub(started.elapsed()));
    }
}
