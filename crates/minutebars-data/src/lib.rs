//! Session simulation, resampling and export.

mod aggregate;
mod bucket;
mod csv_sink;
mod generator;

pub use aggregate::{aggregate, aggregate_str};
pub use bucket::bucket_by_time;
pub use csv_sink::{format_timestamp, table_header, write_table};
pub use generator::{
    make_trading_index, parse_date, simulate, simulate_1min_ohlc, SessionParams, MIN_PRICE,
    TRADING_MINUTES,
};
