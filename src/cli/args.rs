//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bear detection front-end for the remote detection service.
#[derive(Debug, Parser)]
#[command(name = "bearwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by all subcommands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Base URL of the detection service (overrides config).
    #[arg(long, global = true, env = "BEARWATCH_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides config).
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Suppress progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable the progress spinner.
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Detect bears in a single image.
    Image {
        /// Path to the image file.
        file: PathBuf,

        /// Write the annotated image returned by the service to this path.
        #[arg(long)]
        save_annotated: Option<PathBuf>,
    },
    /// Analyze a video for bear activity.
    Video {
        /// Path to the video file.
        file: PathBuf,
    },
    /// List historical sighting points.
    Map {
        /// Start date, inclusive (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date)]
        start: Option<NaiveDate>,

        /// End date, inclusive (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Parse an ISO date argument.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("'{s}' is not a valid date (expected YYYY-MM-DD)"))
}
