//! End-to-end checks across generator, aggregator and metrics.

use chrono::Duration;
use minutebars_core::types::{PriceTable, Rule};
use minutebars_data::{
    aggregate, aggregate_str, make_trading_index, parse_date, simulate_1min_ohlc, SessionParams,
};
use minutebars_indicators::{add_time_rolling_metrics, add_vwap_from_1m};
use minutebars_session::{run_pipeline, write_session, SESSION_FILES};

fn session(seed: u64) -> PriceTable {
    simulate_1min_ohlc(100.0, "2025-10-07", 0.0, 0.0018, Some(seed)).unwrap()
}

#[test]
fn generate_shape_and_invariants() {
    let idx = make_trading_index(parse_date("2025-10-07").unwrap());
    assert_eq!(idx.len(), 390);
    assert_eq!(idx[0].time().to_string(), "09:30:00");
    assert_eq!(idx[389].time().to_string(), "15:59:00");

    let df = session(1);
    assert_eq!(df.len(), 390);
    assert!(df.iter().all(|b| b.high >= b.open.max(b.close)));
    assert!(df.iter().all(|b| b.low <= b.open.min(b.close)));
    assert!(df.iter().all(|b| b.low > 0.0));
    assert!(df.iter().all(|b| b.volume > 0));
}

#[test]
fn aggregate_sizes_and_first_bucket_logic() {
    let df1 = session(2);
    let df5 = aggregate(&df1, Rule::FiveMinute).unwrap();
    let df30 = aggregate(&df1, Rule::ThirtyMinute).unwrap();
    let dfd = aggregate(&df1, Rule::Daily).unwrap();

    assert_eq!(df5.len(), 78);
    assert_eq!(df30.len(), 13);
    assert_eq!(dfd.len(), 1);

    let start = df5.first().unwrap().timestamp;
    let end = start + Duration::minutes(5) - Duration::minutes(1);
    let window: Vec<_> = df1
        .iter()
        .filter(|b| b.timestamp >= start && b.timestamp <= end)
        .collect();
    let first = df5.get_at(start).unwrap();

    assert!((first.open - window[0].open).abs() < 1e-12);
    assert!((first.close - window[window.len() - 1].close).abs() < 1e-12);
    assert_eq!(first.high, window.iter().map(|b| b.high).fold(f64::MIN, f64::max));
    assert_eq!(first.low, window.iter().map(|b| b.low).fold(f64::MAX, f64::min));
    assert_eq!(first.volume, window.iter().map(|b| b.volume).sum::<u64>());
}

#[test]
fn vwap_and_rolling_metrics_basic() {
    let df1 = session(3);
    let df5 = aggregate(&df1, Rule::FiveMinute).unwrap();
    let df5 = add_vwap_from_1m(&df5, &df1, Rule::FiveMinute);
    let df5 = add_time_rolling_metrics(&df5).unwrap();

    for bar in df5.iter() {
        if let Some(vwap) = bar.vwap {
            assert!(vwap >= bar.low && vwap <= bar.high);
        }
    }

    let ready = df5.first().unwrap().timestamp + Duration::minutes(35);
    for bar in df5.iter().filter(|b| b.timestamp >= ready) {
        assert!(bar.ma_30m.is_some());
        assert!(bar.median_15m.is_some());
    }
}

#[test]
fn daily_vwap_is_null() {
    let df1 = session(4);
    let dfd = add_vwap_from_1m(&aggregate(&df1, Rule::Daily).unwrap(), &df1, Rule::Daily);
    assert!(dfd.iter().all(|b| b.vwap.is_none()));
}

#[test]
fn determinism_law() {
    let a = simulate_1min_ohlc(123.4, "2024-02-29", 0.0002, 0.003, Some(17)).unwrap();
    let b = simulate_1min_ohlc(123.4, "2024-02-29", 0.0002, 0.003, Some(17)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn aggregating_empty_table_is_empty() {
    for rule in Rule::all() {
        assert!(aggregate(&PriceTable::empty(None), *rule).unwrap().is_empty());
    }
    assert!(aggregate_str(&PriceTable::empty(None), "30T").unwrap().is_empty());
}

#[test]
fn example_scenario() {
    let df1 = simulate_1min_ohlc(100.0, "2025-10-07", 0.0, 0.0018, Some(1)).unwrap();
    assert_eq!(df1.len(), 390);
    assert_eq!(df1.first().unwrap().timestamp.to_string(), "2025-10-07 09:30:00");
    assert_eq!(df1.last().unwrap().timestamp.to_string(), "2025-10-07 15:59:00");

    let df5 = aggregate_str(&df1, "5min").unwrap();
    assert_eq!(df5.len(), 78);
    assert_eq!(df5.first().unwrap().open, df1.first().unwrap().open);
}

#[test]
fn session_pipeline_matches_stepwise_calls() {
    let params = SessionParams {
        seed: Some(1),
        ..SessionParams::default()
    };
    let tables = run_pipeline(&params).unwrap();

    let df1 = session(1);
    let df5 = aggregate(&df1, Rule::FiveMinute).unwrap();
    let df5 = add_time_rolling_metrics(&add_vwap_from_1m(&df5, &df1, Rule::FiveMinute)).unwrap();

    assert_eq!(tables.minute, df1);
    assert_eq!(tables.five_minute, df5);

    let dir = tempfile::tempdir().unwrap();
    let written = write_session(dir.path(), &tables).unwrap();
    assert_eq!(written.len(), SESSION_FILES.len());
}
