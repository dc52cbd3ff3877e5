//! Core types and traits for the minutebars pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, PriceTable)
//! - The closed set of aggregation rules
//! - The window statistic trait used by rolling metrics

pub mod types;
pub mod traits;
pub mod error;

pub use error::{BarsError, BarsResult};
pub use types::*;
pub use traits::*;
