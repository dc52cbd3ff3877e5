//! Resampling of 1-minute bars into coarser bars.

use minutebars_core::error::DataError;
use minutebars_core::types::{Bar, PriceTable, Rule};
use tracing::debug;

use crate::bucket::bucket_by_time;

/// Aggregate 1-minute OHLCV into 5-minute, 30-minute or daily bars.
///
/// Buckets are anchored at the first input timestamp, so a session opening
/// at 09:30 yields buckets starting 09:30, 09:35, ... An empty input gives
/// an empty output. Input rows must be in time order; bucket labels then
/// inherit it.
pub fn aggregate(table_1m: &PriceTable, rule: Rule) -> Result<PriceTable, DataError> {
    let Some(first) = table_1m.first() else {
        return Ok(PriceTable::empty(Some(rule)));
    };

    let bars: Vec<Bar> = bucket_by_time(
        table_1m.bars(),
        first.timestamp,
        rule.width(),
        |b| b.timestamp,
        |label, run| Bar::from_constituents(label, run),
    )
    .into_iter()
    .flatten()
    .collect();

    debug!(
        rule = %rule,
        input_rows = table_1m.len(),
        output_rows = bars.len(),
        "Aggregated bars"
    );

    PriceTable::new(Some(rule), bars)
}

/// Aggregate using a raw rule spelling such as `5T`, `30min` or `1D`.
pub fn aggregate_str(table_1m: &PriceTable, rule: &str) -> Result<PriceTable, DataError> {
    let rule: Rule = rule.parse()?;
    aggregate(table_1m, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::simulate_1min_ohlc;
    use chrono::Duration;

    fn session(seed: u64) -> PriceTable {
        simulate_1min_ohlc(100.0, "2025-10-07", 0.0, 0.0018, Some(seed)).unwrap()
    }

    #[test]
    fn test_aggregate_sizes() {
        let df1 = session(2);

        assert_eq!(aggregate(&df1, Rule::FiveMinute).unwrap().len(), 78);
        assert_eq!(aggregate(&df1, Rule::ThirtyMinute).unwrap().len(), 13);
        assert_eq!(aggregate(&df1, Rule::Daily).unwrap().len(), 1);
    }

    #[test]
    fn test_first_bucket_logic() {
        let df1 = session(2);
        let df5 = aggregate(&df1, Rule::FiveMinute).unwrap();

        let first = df5.first().unwrap();
        let window = &df1.bars()[..5];

        assert_eq!(first.timestamp, df1.first().unwrap().timestamp);
        assert_eq!(first.open, window[0].open);
        assert_eq!(first.close, window[4].close);
        assert_eq!(
            first.high,
            window.iter().map(|b| b.high).fold(f64::MIN, f64::max)
        );
        assert_eq!(
            first.low,
            window.iter().map(|b| b.low).fold(f64::MAX, f64::min)
        );
        assert_eq!(first.volume, window.iter().map(|b| b.volume).sum::<u64>());
    }

    #[test]
    fn test_labels_step_by_width() {
        let df1 = session(4);
        let df30 = aggregate(&df1, Rule::ThirtyMinute).unwrap();

        assert_eq!(df30.first().unwrap().timestamp.to_string(), "2025-10-07 09:30:00");
        assert_eq!(df30.last().unwrap().timestamp.to_string(), "2025-10-07 15:30:00");
        assert!(df30
            .timestamps()
            .windows(2)
            .all(|w| w[1] - w[0] == Duration::minutes(30)));
        assert_eq!(df30.rule(), Some(Rule::ThirtyMinute));
    }

    #[test]
    fn test_daily_covers_session() {
        let df1 = session(5);
        let dfd = aggregate(&df1, Rule::Daily).unwrap();
        let day = dfd.first().unwrap();

        assert_eq!(day.open, df1.first().unwrap().open);
        assert_eq!(day.close, df1.last().unwrap().close);
        assert_eq!(day.volume, df1.volumes().iter().sum::<u64>());
        assert!(day.tp.is_none());
    }

    #[test]
    fn test_volume_preserved() {
        let df1 = session(6);
        let total: u64 = df1.volumes().iter().sum();
        for rule in Rule::all() {
            let agg = aggregate(&df1, *rule).unwrap();
            assert_eq!(agg.volumes().iter().sum::<u64>(), total);
        }
    }

    #[test]
    fn test_aggregate_empty() {
        let empty = PriceTable::empty(None);
        let out = aggregate(&empty, Rule::FiveMinute).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.rule(), Some(Rule::FiveMinute));
    }

    #[test]
    fn test_aggregate_str() {
        let df1 = session(8);
        assert_eq!(aggregate_str(&df1, "5T").unwrap(), aggregate(&df1, Rule::FiveMinute).unwrap());
        assert_eq!(aggregate_str(&df1, "5min").unwrap().len(), 78);
        assert!(matches!(
            aggregate_str(&df1, "7X"),
            Err(DataError::InvalidRule(_))
        ));
    }
}
