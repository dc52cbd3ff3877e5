//! Trailing time-window metrics.

use chrono::{Duration, NaiveDateTime};
use minutebars_core::error::MetricError;
use minutebars_core::traits::WindowStatistic;
use minutebars_core::types::PriceTable;
use tracing::debug;

use crate::statistics::{Mean, Median};

/// Span of the moving average of close.
pub const MA_WINDOW_MINUTES: i64 = 30;

/// Span of the moving median of close.
pub const MEDIAN_WINDOW_MINUTES: i64 = 15;

/// Apply `statistic` over a trailing, duration-based window for every row.
///
/// The window of row `i` holds every row `j <= i` whose timestamp lies
/// within `window` of row `i`, both ends inclusive. Rows near the start see
/// a truncated window rather than a null. Timestamps must be sorted.
pub fn trailing_window<S>(
    timestamps: &[NaiveDateTime],
    values: &[f64],
    window: Duration,
    statistic: &S,
) -> Result<Vec<Option<f64>>, MetricError>
where
    S: WindowStatistic + ?Sized,
{
    if timestamps.len() != values.len() {
        return Err(MetricError::LengthMismatch {
            timestamps: timestamps.len(),
            values: values.len(),
        });
    }
    if window < Duration::zero() {
        return Err(MetricError::InvalidWindow(format!(
            "window must be non-negative, got {}",
            window
        )));
    }

    let mut result = Vec::with_capacity(values.len());
    let mut start = 0;

    for (i, ts) in timestamps.iter().enumerate() {
        while *ts - timestamps[start] > window {
            start += 1;
        }
        result.push(statistic.compute(&values[start..=i]));
    }

    Ok(result)
}

/// Add a 30-minute moving average and a 15-minute moving median of close.
///
/// Windows are measured on the table's own timestamps, so the number of rows
/// they cover depends on the bar width.
pub fn add_time_rolling_metrics(table_agg: &PriceTable) -> Result<PriceTable, MetricError> {
    let timestamps = table_agg.timestamps();
    let closes = table_agg.closes();

    let ma_30m = trailing_window(
        &timestamps,
        &closes,
        Duration::minutes(MA_WINDOW_MINUTES),
        &Mean,
    )?;
    let median_15m = trailing_window(
        &timestamps,
        &closes,
        Duration::minutes(MEDIAN_WINDOW_MINUTES),
        &Median,
    )?;

    debug!(rows = table_agg.len(), "Added rolling metrics");

    Ok(table_agg.with_rolling(&ma_30m, &median_15m))
}
