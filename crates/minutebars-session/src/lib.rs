//! End-to-end session pipeline.

mod engine;
mod report;

pub use engine::{run_pipeline, write_session, SessionTables, SESSION_FILES};
pub use report::{SessionReport, TableSummary};
