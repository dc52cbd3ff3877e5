//! Plain-text table preview for the console.

use minutebars_core::types::{Bar, PriceTable};
use minutebars_data::{format_timestamp, table_header};

/// Layout of a console preview.
///
/// Passed explicitly to [`render_table`]; it never affects computed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Maximum line width in characters
    pub width: usize,
    /// Maximum number of value columns after the timestamp
    pub max_columns: usize,
    /// Number of leading rows shown
    pub rows: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 140,
            max_columns: 10,
            rows: 5,
        }
    }
}

fn price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "NaN".to_string(),
    }
}

fn cell(bar: &Bar, column: &str) -> String {
    match column {
        "open" => price(Some(bar.open)),
        "high" => price(Some(bar.high)),
        "low" => price(Some(bar.low)),
        "close" => price(Some(bar.close)),
        "volume" => bar.volume.to_string(),
        "tp" => price(bar.tp),
        "vwap" => price(bar.vwap),
        "ma_30m" => price(bar.ma_30m),
        "median_15m" => price(bar.median_15m),
        _ => String::new(),
    }
}

fn truncate(line: String, width: usize) -> String {
    if line.chars().count() <= width {
        line
    } else {
        line.chars().take(width).collect()
    }
}

/// Render the first rows of a table under a title line.
pub fn render_table(title: &str, table: &PriceTable, options: &PreviewOptions) -> String {
    let mut columns = table_header(table);
    columns.truncate(options.max_columns.saturating_add(1));

    let mut grid: Vec<Vec<String>> = vec![columns.iter().map(|c| c.to_string()).collect()];
    for bar in table.head(options.rows) {
        let mut row = vec![format_timestamp(bar.timestamp, table.rule())];
        row.extend(columns[1..].iter().map(|c| cell(bar, c)));
        grid.push(row);
    }

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| grid.iter().map(|row| row[i].len()).max().unwrap_or(0))
        .collect();

    let mut out = format!("=== {} ===\n", title);
    for row in &grid {
        let line = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (value, w))| {
                if i == 0 {
                    format!("{:<w$}", value, w = w)
                } else {
                    format!("{:>w$}", value, w = w)
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&truncate(line, options.width));
        out.push('\n');
    }
    if table.len() > options.rows {
        out.push_str(&format!("[{} rows]\n", table.len()));
    }
    out
}
