//! Random-walk simulation of one trading session of 1-minute bars.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use minutebars_core::error::DataError;
use minutebars_core::types::{Bar, PriceTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::ops::Range;
use tracing::debug;

/// Minutes in a regular 09:30-16:00 session.
pub const TRADING_MINUTES: usize = 390;

/// Floor applied to every simulated low.
pub const MIN_PRICE: f64 = 0.01;

const SESSION_OPEN_HOUR: u32 = 9;
const SESSION_OPEN_MINUTE: u32 = 30;
const RANGE_SIGMA_MULTIPLIER: f64 = 6.0;
const VOLUME_RANGE: Range<u64> = 3_000..20_000;

/// Parameters of one simulated session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    /// First open of the session
    pub start_price: f64,
    /// Trading day
    pub date: NaiveDate,
    /// Mean of the per-minute log-return
    pub mu: f64,
    /// Standard deviation of the per-minute log-return
    pub sigma: f64,
    /// Seed for the random source; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            date: NaiveDate::from_ymd_opt(2025, 10, 7).unwrap_or_default(),
            mu: 0.0,
            sigma: 0.0018,
            seed: Some(42),
        }
    }
}

impl SessionParams {
    /// Reject parameters the price process cannot use.
    pub fn validate(&self) -> Result<(), DataError> {
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(DataError::InvalidParameter(format!(
                "start_price must be positive, got {}",
                self.start_price
            )));
        }
        if !self.mu.is_finite() {
            return Err(DataError::InvalidParameter(format!(
                "mu must be finite, got {}",
                self.mu
            )));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(DataError::InvalidParameter(format!(
                "sigma must be non-negative, got {}",
                self.sigma
            )));
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` session date.
pub fn parse_date(date: &str) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| DataError::InvalidDate(date.to_string()))
}

/// Build the 390 minute timestamps of one session, 09:30 through 15:59.
pub fn make_trading_index(date: NaiveDate) -> Vec<NaiveDateTime> {
    let open = NaiveTime::from_hms_opt(SESSION_OPEN_HOUR, SESSION_OPEN_MINUTE, 0)
        .unwrap_or_default();
    let start = date.and_time(open);

    (0..TRADING_MINUTES as i64)
        .map(|i| start + Duration::minutes(i))
        .collect()
}

/// Simulate 1-minute OHLCV bars for one trading day.
///
/// Same arguments always produce the same table when `seed` is set.
pub fn simulate_1min_ohlc(
    start_price: f64,
    date: &str,
    mu: f64,
    sigma: f64,
    seed: Option<u64>,
) -> Result<PriceTable, DataError> {
    let params = SessionParams {
        start_price,
        date: parse_date(date)?,
        mu,
        sigma,
        seed,
    };
    simulate(&params)
}

/// Simulate 1-minute OHLCV bars from validated parameters.
pub fn simulate(params: &SessionParams) -> Result<PriceTable, DataError> {
    params.validate()?;

    let index = make_trading_index(params.date);
    let n = index.len();

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let returns = Normal::new(params.mu, params.sigma)
        .map_err(|e| DataError::InvalidParameter(e.to_string()))?;
    let spread = Normal::new(0.0, params.sigma * RANGE_SIGMA_MULTIPLIER)
        .map_err(|e| DataError::InvalidParameter(e.to_string()))?;

    // Draw order is part of the reproducibility contract: returns, ranges, volumes.
    let log_returns: Vec<f64> = (0..n).map(|_| returns.sample(&mut rng)).collect();
    let range_draws: Vec<f64> = (0..n).map(|_| spread.sample(&mut rng).abs()).collect();
    let volumes: Vec<u64> = (0..n).map(|_| rng.gen_range(VOLUME_RANGE)).collect();

    let mut cumulative = 0.0;
    let closes: Vec<f64> = log_returns
        .iter()
        .map(|r| {
            cumulative += r;
            params.start_price * cumulative.exp()
        })
        .collect();

    let mut bars = Vec::with_capacity(n);
    let mut open = params.start_price;

    for i in 0..n {
        let close = closes[i];
        let upper = open.max(close);
        let lower = open.min(close);
        let intrarange = range_draws[i] * upper;

        let high = upper + 0.5 * intrarange;
        let low = (lower - 0.5 * intrarange).max(MIN_PRICE);

        bars.push(Bar::new(index[i], open, high, low, close, volumes[i]).with_typical_price());
        open = close;
    }

    debug!(
        date = %params.date,
        seed = ?params.seed,
        rows = bars.len(),
        "Simulated 1-minute session"
    );

    PriceTable::new(None, bars)
}
