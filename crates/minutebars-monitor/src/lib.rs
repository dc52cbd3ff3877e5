//! Logging setup and console preview.

mod logging;
mod preview;

pub use logging::setup_logging;
pub use preview::{render_table, PreviewOptions};
