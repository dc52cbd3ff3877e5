//! Configuration structures.

use minutebars_core::error::DataError;
use minutebars_data::{parse_date, SessionParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub preview: PreviewSettings,
}

impl AppConfig {
    /// Check every section that feeds the pipeline.
    pub fn validate(&self) -> Result<(), DataError> {
        self.session.to_params()?.validate()
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Parameters of the simulated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Trading date (YYYY-MM-DD)
    pub date: String,
    pub start_price: f64,
    pub mu: f64,
    pub sigma: f64,
    pub seed: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        let params = SessionParams::default();
        Self {
            date: params.date.format("%Y-%m-%d").to_string(),
            start_price: params.start_price,
            mu: params.mu,
            sigma: params.sigma,
            seed: params.seed,
        }
    }
}

impl SessionSettings {
    /// Convert to validated generator parameters.
    pub fn to_params(&self) -> Result<SessionParams, DataError> {
        let params = SessionParams {
            start_price: self.start_price,
            date: parse_date(&self.date)?,
            mu: self.mu,
            sigma: self.sigma,
            seed: self.seed,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Where CSV files go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for the four session CSVs; nothing is written when unset
    pub dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Console preview layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Maximum line width
    pub width: usize,
    /// Maximum number of value columns shown
    pub max_columns: usize,
    /// Rows shown per table
    pub rows: usize,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            width: 140,
            max_columns: 10,
            rows: 5,
        }
    }
}
