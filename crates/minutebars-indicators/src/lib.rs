//! Derived metrics for aggregated bars.
//!
//! This crate provides:
//! - VWAP reconstructed from the underlying 1-minute bars
//! - A trailing time-window scanner driven by bar timestamps
//! - Moving mean and median of close over fixed durations
//!
//! Every function returns a new table and leaves its inputs untouched.

pub mod rolling;
pub mod statistics;
pub mod vwap;

pub use rolling::{add_time_rolling_metrics, trailing_window, MA_WINDOW_MINUTES, MEDIAN_WINDOW_MINUTES};
pub use statistics::{Mean, Median};
pub use vwap::{add_vwap_from_1m, bucket_vwap};
