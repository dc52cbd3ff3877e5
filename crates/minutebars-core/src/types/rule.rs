//! Aggregation rules for resampling minute bars.

use chrono::Duration;
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Target bucket width for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// 5 minute bars
    FiveMinute,
    /// 30 minute bars
    ThirtyMinute,
    /// Calendar day bars
    Daily,
}

impl Rule {
    /// Get the bucket width in minutes.
    pub fn as_minutes(&self) -> i64 {
        match self {
            Rule::FiveMinute => 5,
            Rule::ThirtyMinute => 30,
            Rule::Daily => 24 * 60,
        }
    }

    /// Get the bucket width.
    pub fn width(&self) -> Duration {
        Duration::minutes(self.as_minutes())
    }

    /// Whether VWAP is reconstructed for bars of this width.
    pub fn supports_vwap(&self) -> bool {
        matches!(self, Rule::FiveMinute | Rule::ThirtyMinute)
    }

    /// Get all rules.
    pub fn all() -> &'static [Rule] {
        &[Rule::FiveMinute, Rule::ThirtyMinute, Rule::Daily]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rule::FiveMinute => "5min",
            Rule::ThirtyMinute => "30min",
            Rule::Daily => "1D",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Rule {
    type Err = DataError;

    /// Accepts the usual spellings: `5T`, `5min`, `5m`, `30T`, `30min`,
    /// `1D`, `D`, `day`, `daily`. Case and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = s.trim().to_lowercase();

        match r.as_str() {
            "1d" | "d" | "1day" | "day" | "daily" => return Ok(Rule::Daily),
            _ => {}
        }

        let minutes = r
            .strip_suffix("min")
            .or_else(|| r.strip_suffix('t'))
            .or_else(|| r.strip_suffix('m'))
            .and_then(|n| n.parse::<u32>().ok());

        match minutes {
            Some(5) => Ok(Rule::FiveMinute),
            Some(30) => Ok(Rule::ThirtyMinute),
            _ => Err(DataError::InvalidRule(s.to_string())),
        }
    }
}
