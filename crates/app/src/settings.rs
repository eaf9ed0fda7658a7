//! Handles settings for the application.
//!
//! Values are layered: an optional TOML file (`config/budget.toml` unless
//! `--config` says otherwise), then `BUDGET_*` environment variables, then
//! command line flags.
use clap::{Parser, Subcommand};
use engine::ChartBasis;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/budget.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub chart_basis: ChartBasis,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            chart_basis: ChartBasis::TotalSpent,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "budget")]
#[command(about = "Spending categories, ledgers and a spend chart")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
    /// Override what spending is compared against: total-spent or balance.
    #[arg(long)]
    chart_basis: Option<ChartBasis>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (default).
    #[default]
    Menu,
    /// Record the sample categories and print their ledgers and chart.
    Demo,
}

pub fn load(args: &Args) -> Result<Settings> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("BUDGET"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(level) = &args.log_level {
        settings.log_level = level.clone();
    }
    if let Some(basis) = args.chart_basis {
        settings.chart_basis = basis;
    }

    Ok(settings)
}
