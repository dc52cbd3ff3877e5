//! CSV export of price tables.

use chrono::NaiveDateTime;
use csv::{Writer, WriterBuilder};
use minutebars_core::error::BarsError;
use minutebars_core::types::{Bar, PriceTable, Rule};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Raw 1-minute row.
#[derive(Debug, Serialize)]
struct MinuteRecord {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    tp: Option<f64>,
}

/// Aggregated row without metrics.
#[derive(Debug, Serialize)]
struct BarRecord {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

/// Aggregated row with VWAP and rolling metrics.
#[derive(Debug, Serialize)]
struct EnrichedRecord {
    timestamp: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
    vwap: Option<f64>,
    ma_30m: Option<f64>,
    median_15m: Option<f64>,
}

/// Row shape a table is exported with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Minute,
    Plain,
    Enriched,
}

impl Layout {
    fn of(table: &PriceTable) -> Self {
        let columns = table.columns();
        if table.rule().is_none() {
            Layout::Minute
        } else if columns.vwap || columns.ma_30m || columns.median_15m {
            Layout::Enriched
        } else {
            Layout::Plain
        }
    }

    fn header(self) -> Vec<&'static str> {
        let mut header = vec!["timestamp", "open", "high", "low", "close", "volume"];
        match self {
            Layout::Minute => header.push("tp"),
            Layout::Plain => {}
            Layout::Enriched => header.extend(["vwap", "ma_30m", "median_15m"]),
        }
        header
    }
}

/// Format a bar timestamp to minute precision, or day precision for daily tables.
pub fn format_timestamp(timestamp: NaiveDateTime, rule: Option<Rule>) -> String {
    match rule {
        Some(Rule::Daily) => timestamp.format("%Y-%m-%d").to_string(),
        _ => timestamp.format("%Y-%m-%d %H:%M").to_string(),
    }
}

/// Column names written for a table, in canonical order.
pub fn table_header(table: &PriceTable) -> Vec<&'static str> {
    Layout::of(table).header()
}

fn write_bar(
    writer: &mut Writer<File>,
    layout: Layout,
    bar: &Bar,
    rule: Option<Rule>,
) -> Result<(), csv::Error> {
    let timestamp = format_timestamp(bar.timestamp, rule);
    match layout {
        Layout::Minute => writer.serialize(MinuteRecord {
            timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            tp: bar.tp,
        }),
        Layout::Plain => writer.serialize(BarRecord {
            timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }),
        Layout::Enriched => writer.serialize(EnrichedRecord {
            timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            vwap: bar.vwap,
            ma_30m: bar.ma_30m,
            median_15m: bar.median_15m,
        }),
    }
}

/// Write one table as CSV with a header row. Null values become empty fields.
pub fn write_table(path: &Path, table: &PriceTable) -> Result<(), BarsError> {
    let layout = Layout::of(table);

    // Header is written by hand so empty tables still get one.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| BarsError::Export(e.to_string()))?;

    writer
        .write_record(layout.header())
        .map_err(|e| BarsError::Export(e.to_string()))?;

    for bar in table.iter() {
        write_bar(&mut writer, layout, bar, table.rule())
            .map_err(|e| BarsError::Export(e.to_string()))?;
    }

    writer.flush()?;
    info!(path = %path.display(), rows = table.len(), "Wrote CSV");
    Ok(())
}
