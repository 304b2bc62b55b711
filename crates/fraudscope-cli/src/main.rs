//! FraudScope CLI - Claim-fraud analytics from the terminal
//!
//! `fraudscope tui` opens the interactive dashboard. Every other subcommand
//! fetches one view from the analytics backend and prints it.
//!
//! # Quick Start
//!
//! ```bash
//! fraudscope --api-url http://localhost:8000 status
//! fraudscope ghosts --search bihar
//! fraudscope hospitals --page-size 25 --state Kerala
//! fraudscope claims --hospital HOSP_0042
//! fraudscope analyze ./claim.pdf
//! fraudscope tui
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use fraudscope_client::FraudScopeClient;
use fraudscope_dashboard::DashboardOptions;
use std::path::PathBuf;

mod commands;
mod config;
mod display;
mod logging;

use commands::{analytics, documents, investigation, Output};
use config::AppConfig;
use logging::{init_logging, LogTarget};

/// FraudScope - healthcare-claim fraud analytics
#[derive(Parser, Debug)]
#[command(name = "fraudscope")]
#[command(author = "FraudScope Contributors")]
#[command(version)]
#[command(about = "Dashboard and CLI for a healthcare-claim fraud analytics backend", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FRAUDSCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Backend origin
    #[arg(long, global = true, env = "FRAUDSCOPE_API_URL")]
    api_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "FRAUDSCOPE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long, global = true, env = "FRAUDSCOPE_LOG_FORMAT")]
    log_format: Option<String>,

    /// Directory for downloaded audit reports
    #[arg(long, global = true)]
    download_dir: Option<PathBuf>,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard
    Tui {
        /// Restrict the provider ranking to one state
        #[arg(long)]
        state: Option<String>,
    },

    /// Aggregate claim counters
    Stats,

    /// Per-state threat table
    States,

    /// Ghost-beneficiary cases
    Ghosts {
        /// Case-insensitive filter on patient id, hospital id or state
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Provider ranking
    Hospitals {
        /// Rows to show: 10, 25, 50, 75, or 0 for all
        #[arg(short, long, default_value = "10")]
        page_size: usize,

        /// Only hospitals in this state
        #[arg(long)]
        state: Option<String>,
    },

    /// Individual claims with their rule flags
    Claims {
        /// Only claims filed by this hospital
        #[arg(long)]
        hospital: Option<String>,
    },

    /// Riskiest hospitals and hospital pairs
    Network,

    /// Isolation-forest summary
    Anomalies,

    /// Patients with claims at several hospitals
    Concurrent,

    /// Procedures billed above their package rate
    Upcoding,

    /// Upload a claim document (PDF, JPEG or PNG) for analysis
    Analyze {
        /// Document to analyze
        file: PathBuf,
    },

    /// Download the audit report for one hospital
    Report {
        /// Hospital id, e.g. HOSP_0042
        hospital_id: String,
    },

    /// Backend store status
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        app_config.api.endpoint = api_url;
    }
    if let Some(level) = cli.log_level {
        app_config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        app_config.logging.format = format;
    }
    if let Some(dir) = cli.download_dir {
        app_config.downloads.dir = dir;
    }

    let target = match cli.command {
        Commands::Tui { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_logging(&app_config.logging, target)?;
    tracing::debug!(endpoint = %app_config.api.endpoint, "configuration loaded");

    let client_config = app_config.api.client_config();
    let output = Output::from_flag(cli.json);

    if let Commands::Tui { state } = cli.command {
        let options = DashboardOptions {
            download_dir: app_config.downloads.dir.clone(),
            hospital_state: state,
        };
        fraudscope_tui::run_dashboard(client_config, options)
            .await
            .context("dashboard terminated")?;
        return Ok(());
    }

    let client = FraudScopeClient::with_config(client_config)?;
    match cli.command {
        Commands::Stats => analytics::stats(&client, output).await?,
        Commands::States => analytics::states(&client, output).await?,
        Commands::Network => analytics::network(&client, output).await?,
        Commands::Anomalies => analytics::anomalies(&client, output).await?,
        Commands::Status => analytics::status(&client, output).await?,
        Commands::Ghosts { search } => {
            investigation::ghosts(&client, search.as_deref(), output).await?
        }
        Commands::Hospitals { page_size, state } => {
            investigation::hospitals(&client, page_size, state.as_deref(), output).await?
        }
        Commands::Claims { hospital } => {
            investigation::claims(&client, hospital.as_deref(), output).await?
        }
        Commands::Concurrent => investigation::concurrent(&client, output).await?,
        Commands::Upcoding => investigation::upcoding(&client, output).await?,
        Commands::Analyze { file } => documents::analyze(&client, &file, output).await?,
        Commands::Report { hospital_id } => {
            documents::report(&client, &hospital_id, &app_config.downloads.dir, output).await?
        }
        Commands::Tui { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hospitals() {
        let cli = Cli::parse_from([
            "fraudscope",
            "--api-url",
            "http://10.0.0.5:8000",
            "hospitals",
            "--page-size",
            "0",
            "--state",
            "Kerala",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.5:8000"));
        match cli.command {
            Commands::Hospitals { page_size, state } => {
                assert_eq!(page_size, 0);
                assert_eq!(state.as_deref(), Some("Kerala"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["fraudscope", "ghosts", "--search", "bihar", "--json"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Ghosts { search: Some(ref s) } if s == "bihar"));
    }

    #[test]
    fn test_parse_claims() {
        let cli = Cli::parse_from(["fraudscope", "claims", "--hospital", "HOSP_0042"]);
        assert!(matches!(cli.command, Commands::Claims { hospital: Some(ref h) } if h == "HOSP_0042"));

        let cli = Cli::parse_from(["fraudscope", "claims"]);
        assert!(matches!(cli.command, Commands::Claims { hospital: None }));
    }
}
