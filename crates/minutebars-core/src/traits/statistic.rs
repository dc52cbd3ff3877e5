//! Statistic trait applied over trailing windows.

/// A summary statistic computed over one window of values.
///
/// Implementations must be pure: the same window always yields the same
/// value. An empty window yields `None`.
pub trait WindowStatistic: Send + Sync {
    /// Compute the statistic for the given window.
    fn compute(&self, window: &[f64]) -> Option<f64>;

    /// Get the name of the statistic.
    fn name(&self) -> &str;
}
