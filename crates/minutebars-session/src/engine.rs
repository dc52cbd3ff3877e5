//! Session pipeline: simulate, aggregate, enrich, export.

use minutebars_core::error::BarsResult;
use minutebars_core::types::{PriceTable, Rule};
use minutebars_data::{aggregate, simulate, write_table, SessionParams};
use minutebars_indicators::{add_time_rolling_metrics, add_vwap_from_1m};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File names written by [`write_session`], in table order.
pub const SESSION_FILES: [&str; 4] = ["bars_1m.csv", "bars_5m.csv", "bars_30m.csv", "bars_1d.csv"];

/// Every table produced for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTables {
    /// Raw 1-minute bars
    pub minute: PriceTable,
    /// Enriched 5-minute bars
    pub five_minute: PriceTable,
    /// Enriched 30-minute bars
    pub thirty_minute: PriceTable,
    /// Enriched daily bars
    pub daily: PriceTable,
}

impl SessionTables {
    /// Tables in export order.
    pub fn tables(&self) -> [&PriceTable; 4] {
        [&self.minute, &self.five_minute, &self.thirty_minute, &self.daily]
    }
}

fn enrich(table_1m: &PriceTable, rule: Rule) -> BarsResult<PriceTable> {
    let agg = aggregate(table_1m, rule)?;
    let agg = add_vwap_from_1m(&agg, table_1m, rule);
    Ok(add_time_rolling_metrics(&agg)?)
}

/// Run generator, aggregator and metrics for one session.
pub fn run_pipeline(params: &SessionParams) -> BarsResult<SessionTables> {
    let minute = simulate(params)?;

    let tables = SessionTables {
        five_minute: enrich(&minute, Rule::FiveMinute)?,
        thirty_minute: enrich(&minute, Rule::ThirtyMinute)?,
        daily: enrich(&minute, Rule::Daily)?,
        minute,
    };

    debug!(
        minute = tables.minute.len(),
        five_minute = tables.five_minute.len(),
        thirty_minute = tables.thirty_minute.len(),
        daily = tables.daily.len(),
        "Pipeline complete"
    );

    Ok(tables)
}

/// Write the four session tables into `dir`, creating it if needed.
pub fn write_session(dir: &Path, tables: &SessionTables) -> BarsResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(SESSION_FILES.len());
    for (name, table) in SESSION_FILES.iter().zip(tables.tables()) {
        let path = dir.join(name);
        write_table(&path, table)?;
        written.push(path);
    }

    info!(dir = %dir.display(), files = written.len(), "Saved session CSVs");
    Ok(written)
}
