use crate::services::validator::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hdf-attest",
    version,
    about = "Merge manual attestations into compliance test reports"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "Log progress at info level")]
    pub verbose: bool,
    #[arg(
        long,
        global = true,
        value_parser = parse_now,
        help = "Evaluate freshness as of this date (YYYY-MM-DD) instead of the clock"
    )]
    pub now: Option<NaiveDate>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply attestations to a report
    Apply {
        #[arg(long, help = "Report JSON produced by the test runner")]
        report: PathBuf,
        #[arg(long, help = "Attestation config (JSON or TOML)")]
        config: PathBuf,
        #[arg(long, help = "Write the enriched report here instead of stdout")]
        output: Option<PathBuf>,
    },
    /// Load and validate attestations without touching a report
    Validate {
        #[arg(long)]
        config: PathBuf,
    },
    /// List attestations that are due for review
    Status {
        #[arg(long)]
        config: PathBuf,
    },
}

fn parse_now(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).ok_or_else(|| format!("expected YYYY-MM-DD, got {raw:?}"))
}
