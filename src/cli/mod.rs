//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minutebars")]
#[command(author, version, about = "Generate 1m OHLC, aggregate, and compute basic metrics")]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a session, aggregate it and compute metrics
    Generate(GenerateArgs),
    /// Validate configuration and print the effective settings
    ValidateConfig,
}

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    /// Session report followed by table previews
    #[default]
    Text,
    /// Session report as JSON
    Json,
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Trading date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Starting price
    #[arg(long, allow_hyphen_values = true)]
    pub start_price: Option<f64>,

    /// Random seed
    #[arg(long, conflicts_with = "unseeded")]
    pub seed: Option<u64>,

    /// Seed from OS entropy instead of a fixed seed
    #[arg(long)]
    pub unseeded: bool,

    /// Drift of the per-minute log-return
    #[arg(long, allow_hyphen_values = true)]
    pub mu: Option<f64>,

    /// Volatility of the per-minute log-return
    #[arg(long, allow_hyphen_values = true)]
    pub sigma: Option<f64>,

    /// Folder to save CSVs
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}
