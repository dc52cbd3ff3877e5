//! Core data types for the minutebars pipeline.

mod bar;
mod rule;
mod table;

pub use bar::Bar;
pub use rule::Rule;
pub use table::{DerivedColumns, PriceTable};
