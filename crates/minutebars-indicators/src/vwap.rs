//! VWAP reconstructed from 1-minute bars.

use chrono::NaiveDateTime;
use minutebars_core::types::{PriceTable, Rule};
use minutebars_data::bucket_by_time;
use std::collections::HashMap;
use tracing::debug;

/// Per-bucket VWAP of the 1-minute table, `(label, vwap)` in label order.
///
/// Buckets use the same anchoring as aggregation: left-closed, left-labeled,
/// starting at the first 1-minute timestamp. Typical price is recomputed from
/// high, low and close. A bucket with zero volume has no VWAP.
pub fn bucket_vwap(table_1m: &PriceTable, rule: Rule) -> Vec<(NaiveDateTime, Option<f64>)> {
    let Some(first) = table_1m.first() else {
        return Vec::new();
    };

    bucket_by_time(
        table_1m.bars(),
        first.timestamp,
        rule.width(),
        |b| b.timestamp,
        |label, run| {
            let (num, den) = run.iter().fold((0.0, 0.0), |(num, den), b| {
                let volume = b.volume as f64;
                (num + b.typical_price() * volume, den + volume)
            });
            let vwap = if den > 0.0 { Some(num / den) } else { None };
            (label, vwap)
        },
    )
}

/// Add a `vwap` column to aggregated bars using the original 1-minute data.
///
/// Only 5-minute and 30-minute rules produce values; any other rule, or an
/// empty input, yields a column of nulls. Aggregated rows without a matching
/// bucket also get null.
pub fn add_vwap_from_1m(table_agg: &PriceTable, table_1m: &PriceTable, rule: Rule) -> PriceTable {
    if table_agg.is_empty() || table_1m.is_empty() || !rule.supports_vwap() {
        return table_agg.with_vwap(&vec![None; table_agg.len()]);
    }

    let by_label: HashMap<NaiveDateTime, Option<f64>> =
        bucket_vwap(table_1m, rule).into_iter().collect();

    let values: Vec<Option<f64>> = table_agg
        .iter()
        .map(|b| by_label.get(&b.timestamp).copied().flatten())
        .collect();

    debug!(
        rule = %rule,
        rows = table_agg.len(),
        filled = values.iter().filter(|v| v.is_some()).count(),
        "Added VWAP"
    );

    table_agg.with_vwap(&values)
}
