//! Core traits for the minutebars pipeline.

mod statistic;

pub use statistic::WindowStatistic;
