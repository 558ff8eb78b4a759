use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "gamepal", about = "Track board games, players and play sessions")]
pub struct Args {
    /// Start with a sample collection of games, players and sessions
    #[arg(long)]
    pub demo: bool,

    /// Print history and statistics to stdout instead of starting the UI
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,

    /// Directory for log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["gamepal"]);

        assert!(!args.demo);
        assert_eq!(args.report, None);
        assert_eq!(args.log_dir, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_report_json() {
        let args = Args::parse_from(["gamepal", "--demo", "--report", "json"]);

        assert!(args.demo);
        assert_eq!(args.report, Some(ReportFormat::Json));
    }

    #[test]
    fn test_rejects_unknown_report_format() {
        assert!(Args::try_parse_from(["gamepal", "--report", "xml"]).is_err());
    }
}
