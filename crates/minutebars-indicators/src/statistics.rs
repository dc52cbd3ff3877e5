//! Window statistics backed by `statrs`.

use minutebars_core::traits::WindowStatistic;
use statrs::statistics::{Data, Median as _, Statistics};

/// Arithmetic mean of the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl WindowStatistic for Mean {
    fn compute(&self, window: &[f64]) -> Option<f64> {
        if window.is_empty() {
            return None;
        }
        Some(window.iter().mean())
    }

    fn name(&self) -> &str {
        "mean"
    }
}

/// Median of the window; even-sized windows average the two middle values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl WindowStatistic for Median {
    fn compute(&self, window: &[f64]) -> Option<f64> {
        if window.is_empty() {
            return None;
        }
        let data = Data::new(window.to_vec());
        Some(data.median())
    }

    fn name(&self) -> &str {
        "median"
    }
}
