//! Session report generation.

use chrono::{NaiveDate, NaiveDateTime};
use minutebars_core::types::PriceTable;
use minutebars_data::SessionParams;
use serde::{Deserialize, Serialize};

use crate::SessionTables;

/// Shape and price envelope of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Table label, e.g. `1min` or `5min`
    pub timeframe: String,
    pub rows: usize,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: u64,
}

impl TableSummary {
    /// Summarize a table.
    pub fn from_table(table: &PriceTable) -> Self {
        let timeframe = table
            .rule()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "1min".to_string());

        Self {
            timeframe,
            rows: table.len(),
            first: table.first().map(|b| b.timestamp),
            last: table.last().map(|b| b.timestamp),
            open: table.first().map(|b| b.open),
            high: table.iter().map(|b| b.high).reduce(f64::max),
            low: table.iter().map(|b| b.low).reduce(f64::min),
            close: table.last().map(|b| b.close),
            volume: table.iter().map(|b| b.volume).sum(),
        }
    }
}

/// Complete session report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub date: NaiveDate,
    pub start_price: f64,
    pub mu: f64,
    pub sigma: f64,
    pub seed: Option<u64>,
    /// One entry per table, 1-minute first
    pub tables: Vec<TableSummary>,
}

impl SessionReport {
    /// Build a report for a finished pipeline run.
    pub fn new(params: &SessionParams, tables: &SessionTables) -> Self {
        Self {
            date: params.date,
            start_price: params.start_price,
            mu: params.mu,
            sigma: params.sigma,
            seed: params.seed,
            tables: tables.tables().into_iter().map(TableSummary::from_table).collect(),
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                      SESSION REPORT                        \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("PARAMETERS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Date:                {}\n", self.date));
        s.push_str(&format!("  Start Price:         {:.2}\n", self.start_price));
        s.push_str(&format!("  Drift (mu):          {}\n", self.mu));
        s.push_str(&format!("  Volatility (sigma):  {}\n", self.sigma));
        match self.seed {
            Some(seed) => s.push_str(&format!("  Seed:                {}\n", seed)),
            None => s.push_str("  Seed:                (entropy)\n"),
        }
        s.push('\n');

        s.push_str("TABLES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        for t in &self.tables {
            s.push_str(&format!("  {:<6} {:>4} rows", t.timeframe, t.rows));
            if let (Some(open), Some(high), Some(low), Some(close)) = (t.open, t.high, t.low, t.close) {
                s.push_str(&format!(
                    "  O {:.2}  H {:.2}  L {:.2}  C {:.2}  V {}",
                    open, high, low, close, t.volume
                ));
            }
            s.push('\n');
        }
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
