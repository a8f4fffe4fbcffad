mod commands;
mod relay;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use planwell_core::SeriesKind;
use planwell_core::config::PlanwellConfig;
use planwell_core::select::DEFAULT_UPCOMING_COUNT;
use tracing_subscriber::EnvFilter;

use crate::relay::FormKind;

#[derive(Parser)]
#[command(name = "planwell")]
#[command(about = "Upcoming PlanWell workshops and webinars, calendar files and form relay")]
struct Cli {
    /// Treat this instant as the current time (RFC 3339, e.g. 2025-12-30T10:00:00-05:00)
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the next scheduled session
    Next {
        #[arg(short, long, value_enum, default_value_t = SeriesKind::Workshop)]
        series: SeriesKind,
    },
    /// List the next few sessions
    Upcoming {
        #[arg(short, long, value_enum, default_value_t = SeriesKind::Workshop)]
        series: SeriesKind,

        /// How many sessions to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_UPCOMING_COUNT)]
        count: usize,
    },
    /// Export a session as an .ics calendar file
    Ics {
        #[arg(short, long, value_enum, default_value_t = SeriesKind::Workshop)]
        series: SeriesKind,

        /// Event id (defaults to the next session)
        #[arg(long)]
        id: Option<String>,

        /// File or directory to write to (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate catalogs and report labels that disagree with their dates
    Check {
        /// Only check this series
        #[arg(short, long, value_enum)]
        series: Option<SeriesKind>,
    },
    /// Show which nurture reminder is due for each upcoming session
    Reminders {
        #[arg(short, long, value_enum, default_value_t = SeriesKind::Workshop)]
        series: SeriesKind,
    },
    /// Relay a form submission to its webhook
    Submit {
        #[arg(long = "type", value_enum)]
        kind: FormKind,

        /// Form fields as key=value
        #[arg(value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlanwellConfig::load()?;
    init_logging(&config.log);

    let now = cli.now.unwrap_or_else(Utc::now);
    tracing::debug!(%now, "resolved current time");

    match cli.command {
        Commands::Next { series } => commands::next::run(&config.catalog(series)?, now),
        Commands::Upcoming { series, count } => {
            commands::upcoming::run(&config.catalog(series)?, now, count)
        }
        Commands::Ics { series, id, output } => commands::ics::run(
            &config.catalog(series)?,
            id.as_deref(),
            output.as_deref(),
            now,
        ),
        Commands::Check { series } => {
            let kinds = match series {
                Some(kind) => vec![kind],
                None => SeriesKind::ALL.to_vec(),
            };
            commands::check::run(&config, &kinds)
        }
        Commands::Reminders { series } => commands::reminders::run(&config.catalog(series)?, now),
        Commands::Submit { kind, fields } => commands::submit::run(&config, kind, fields).await,
    }
}

/// Log to stderr so .ics output on stdout stays clean.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid instant '{}': {}", s, e))
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected key=value, got '{}'", s))?;

    if key.trim().is_empty() {
        return Err(format!("Empty field name in '{}'", s));
    }

    Ok((key.trim().to_string(), value.to_string()))
}
