//! Kubecost Report CLI
//!
//! A command-line tool for the cost management report: overall asset
//! costs, per-dimension breakdowns, cumulative daily series, and the
//! execution cost table, all fetched from a Kubecost-compatible API.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use report_lib::{Dimension, Window};

/// Kubecost Report CLI
#[derive(Parser)]
#[command(name = "kcost")]
#[command(author, version, about = "CLI for the Kubecost cost management report", long_about = None)]
pub struct Cli {
    /// Cost API base URL (can also be set via KUBECOST_URL env var)
    #[arg(long, env = "KUBECOST_URL", default_value = "http://localhost:9090/model")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show overall cost per asset category
    Overall {
        /// Reporting window
        #[arg(long, short, default_value = "30d")]
        window: WindowArg,

        /// Restrict to one organization
        #[arg(long)]
        org: Option<String>,
    },

    /// Break down cost by a label dimension
    Breakdown {
        /// Breakdown dimension
        #[arg(long, short)]
        dimension: DimensionArg,

        /// Reporting window
        #[arg(long, short, default_value = "30d")]
        window: WindowArg,

        /// Restrict to one organization
        #[arg(long)]
        org: Option<String>,
    },

    /// Show the cumulative daily cost series
    Daily {
        /// Reporting window
        #[arg(long, short, default_value = "30d")]
        window: WindowArg,

        /// Restrict to one organization
        #[arg(long)]
        org: Option<String>,
    },

    /// Show the execution cost table
    Executions {
        /// Reporting window
        #[arg(long, short, default_value = "30d")]
        window: WindowArg,

        /// Restrict to one organization
        #[arg(long)]
        org: Option<String>,
    },

    /// List organizations seen over the last 30 days
    Orgs,
}

/// Reporting window accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WindowArg {
    #[value(name = "30d")]
    Last30Days,
    #[value(name = "15d")]
    Last15Days,
    #[value(name = "lastweek")]
    LastWeek,
    #[value(name = "today")]
    Today,
}

impl From<WindowArg> for Window {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Last30Days => Window::Last30Days,
            WindowArg::Last15Days => Window::Last15Days,
            WindowArg::LastWeek => Window::LastWeek,
            WindowArg::Today => Window::Today,
        }
    }
}

/// Breakdown dimension accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DimensionArg {
    ExecutionType,
    TopProjects,
    User,
    Organization,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::ExecutionType => Dimension::ExecutionType,
            DimensionArg::TopProjects => Dimension::TopProjects,
            DimensionArg::User => Dimension::User,
            DimensionArg::Organization => Dimension::Organization,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so piped table/JSON output stays clean
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load credentials and spend thresholds
    let report_config = config::ReportConfig::load()?;

    // Initialize client
    let client = client::ApiClient::new(
        &cli.api_url,
        report_config.username.clone(),
        report_config.password.clone(),
    )?;

    // Execute command
    match cli.command {
        Commands::Overall { window, org } => {
            commands::overall::show_overall(&client, window.into(), org, cli.format).await?;
        }
        Commands::Breakdown {
            dimension,
            window,
            org,
        } => {
            let dimension: Dimension = dimension.into();
            let threshold = report_config.spend_threshold(dimension);
            commands::breakdown::show_breakdown(
                &client,
                dimension,
                window.into(),
                org,
                threshold,
                cli.format,
            )
            .await?;
        }
        Commands::Daily { window, org } => {
            commands::daily::show_daily(
                &client,
                window.into(),
                org,
                report_config.execution_cost_max,
                cli.format,
            )
            .await?;
        }
        Commands::Executions { window, org } => {
            commands::executions::show_executions(&client, window.into(), org, cli.format).await?;
        }
        Commands::Orgs => {
            commands::orgs::list_organizations(&client, cli.format).await?;
        }
    }

    Ok(())
}
