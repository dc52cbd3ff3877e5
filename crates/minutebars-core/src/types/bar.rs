//! OHLCV (Open, High, Low, Close, Volume) bar type.

use chrono::NaiveDateTime;

/// One row of a price table.
///
/// The OHLCV fields are always present. The remaining fields are derived
/// columns that later pipeline stages may overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    /// Start of the interval this bar covers
    pub timestamp: NaiveDateTime,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
    /// Typical price (HLC average)
    pub tp: Option<f64>,
    /// Volume-weighted average price
    pub vwap: Option<f64>,
    /// Trailing 30-minute moving average of close
    pub ma_30m: Option<f64>,
    /// Trailing 15-minute moving median of close
    pub median_15m: Option<f64>,
}

impl Bar {
    /// Create a new bar with no derived columns.
    pub fn new(
        timestamp: NaiveDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            tp: None,
            vwap: None,
            ma_30m: None,
            median_15m: None,
        }
    }

    /// Attach the typical price column.
    pub fn with_typical_price(mut self) -> Self {
        self.tp = Some(self.typical_price());
        self
    }

    /// Reduce a run of finer bars into one bar labeled `timestamp`.
    ///
    /// Open is taken from the first bar, close from the last, high and low
    /// are the extremes and volume is summed. Returns `None` for an empty run.
    pub fn from_constituents(timestamp: NaiveDateTime, bars: &[Bar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;
        let mut high = first.high;
        let mut low = first.low;
        let mut volume = 0u64;
        for b in bars {
            high = high.max(b.high);
            low = low.min(b.low);
            volume += b.volume;
        }
        Some(Self::new(timestamp, first.open, high, low, last.close, volume))
    }

    /// Calculate the typical price (HLC average).
    #[inline]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Check the OHLC envelope: high and low wrap open and close, low stays positive.
    pub fn is_well_formed(&self) -> bool {
        self.high >= self.open.max(self.close)
            && self.low <= self.open.min(self.close)
            && self.low > 0.0
    }
}
