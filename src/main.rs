use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gamepal::{
    args::{Args, ReportFormat},
    logging::{default_log_dir, init_tracing},
    tracker::Tracker,
    ui::run_ui,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_dir = args.log_dir.clone().unwrap_or_else(default_log_dir);
    let _guard = init_tracing(&log_dir, &args.log_level)?;
    info!(log_dir = %log_dir.display(), demo = args.demo, "gamepal starting");

    let tracker = if args.demo {
        Tracker::demo().context("failed to build demo collection")?
    } else {
        Tracker::new()
    };

    match args.report {
        Some(format) => print_report(&tracker, format),
        None => run_ui(tracker),
    }
}

fn print_report(tracker: &Tracker, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            println!("== History ==");
            print!("{}", tracker.history_report());
            println!("== Statistics ==");
            print!("{}", tracker.statistics_report());
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&tracker.snapshot())
                .context("failed to serialize statistics")?;
            println!("{json}");
        }
    }
    Ok(())
}
