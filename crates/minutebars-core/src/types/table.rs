//! Time-ordered bar tables.

use chrono::NaiveDateTime;

use super::{Bar, Rule};
use crate::error::DataError;

/// Which optional columns a table carries.
///
/// A column can be present while every value in it is null, e.g. the VWAP
/// column of a daily table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedColumns {
    pub tp: bool,
    pub vwap: bool,
    pub ma_30m: bool,
    pub median_15m: bool,
}

/// An ordered sequence of bars for one trading session.
///
/// Timestamps are strictly increasing. Tables are never mutated once handed
/// to another stage; stages that add columns return a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    /// Bucket width, `None` for the native 1-minute table
    rule: Option<Rule>,
    bars: Vec<Bar>,
    columns: DerivedColumns,
}

impl PriceTable {
    /// Build a table, rejecting timestamps that are not strictly increasing.
    pub fn new(rule: Option<Rule>, bars: Vec<Bar>) -> Result<Self, DataError> {
        if let Some(index) = bars
            .windows(2)
            .position(|w| w[1].timestamp <= w[0].timestamp)
        {
            return Err(DataError::UnorderedTimestamps { index: index + 1 });
        }

        let columns = DerivedColumns {
            tp: !bars.is_empty() && bars.iter().all(|b| b.tp.is_some()),
            ..DerivedColumns::default()
        };

        Ok(Self {
            rule,
            bars,
            columns,
        })
    }

    /// Create an empty table.
    pub fn empty(rule: Option<Rule>) -> Self {
        Self {
            rule,
            bars: Vec::new(),
            columns: DerivedColumns::default(),
        }
    }

    /// Get the bucket width of this table.
    pub fn rule(&self) -> Option<Rule> {
        self.rule
    }

    /// Get the optional columns this table carries.
    pub fn columns(&self) -> DerivedColumns {
        self.columns
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get the first bar.
    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Get a bar by position (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Look up the bar labeled `timestamp`.
    pub fn get_at(&self, timestamp: NaiveDateTime) -> Option<&Bar> {
        self.bars
            .binary_search_by_key(&timestamp, |b| b.timestamp)
            .ok()
            .map(|i| &self.bars[i])
    }

    /// Get the first n bars.
    pub fn head(&self, n: usize) -> &[Bar] {
        &self.bars[..n.min(self.bars.len())]
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Extract timestamps as a vector.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<u64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Return a copy of this table with the VWAP column replaced.
    ///
    /// `values` is aligned by position and must have one entry per bar.
    pub fn with_vwap(&self, values: &[Option<f64>]) -> Self {
        let mut out = self.clone();
        for (bar, v) in out.bars.iter_mut().zip(values) {
            bar.vwap = *v;
        }
        out.columns.vwap = true;
        out
    }

    /// Return a copy of this table with the rolling metric columns replaced.
    pub fn with_rolling(&self, ma_30m: &[Option<f64>], median_15m: &[Option<f64>]) -> Self {
        let mut out = self.clone();
        for ((bar, ma), med) in out.bars.iter_mut().zip(ma_30m).zip(median_15m) {
            bar.ma_30m = *ma;
            bar.median_15m = *med;
        }
        out.columns.ma_30m = true;
        out.columns.median_15m = true;
        out
    }
}

impl<'a> IntoIterator for &'a PriceTable {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 7)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample() -> PriceTable {
        PriceTable::new(
            None,
            vec![
                Bar::new(ts(9, 30), 100.0, 101.0, 99.0, 100.5, 1_000),
                Bar::new(ts(9, 31), 100.5, 102.0, 100.0, 101.5, 2_000),
                Bar::new(ts(9, 32), 101.5, 103.0, 101.0, 102.5, 3_000),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_rejects_unordered() {
        let bars = vec![
            Bar::new(ts(9, 31), 100.0, 101.0, 99.0, 100.5, 1_000),
            Bar::new(ts(9, 31), 100.5, 102.0, 100.0, 101.5, 2_000),
        ];
        assert_eq!(
            PriceTable::new(None, bars),
            Err(DataError::UnorderedTimestamps { index: 1 })
        );
    }

    #[test]
    fn test_table_extractions() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.closes(), vec![100.5, 101.5, 102.5]);
        assert_eq!(table.volumes(), vec![1_000, 2_000, 3_000]);
        assert_eq!(table.get_at(ts(9, 31)).unwrap().close, 101.5);
        assert!(table.get_at(ts(9, 33)).is_none());
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
        assert!(!table.columns().tp);
    }

    #[test]
    fn test_overlay_leaves_source_untouched() {
        let table = sample();
        let enriched = table.with_vwap(&[Some(100.2), None, Some(102.0)]);

        assert!(enriched.columns().vwap);
        assert_eq!(enriched.get(0).unwrap().vwap, Some(100.2));
        assert_eq!(enriched.get(1).unwrap().vwap, None);

        assert!(!table.columns().vwap);
        assert!(table.iter().all(|b| b.vwap.is_none()));
    }

    #[test]
    fn test_empty_table() {
        let table = PriceTable::empty(Some(Rule::FiveMinute));
        assert!(table.is_empty());
        assert_eq!(table.rule(), Some(Rule::FiveMinute));
        assert!(table.first().is_none());
        assert_eq!(PriceTable::new(None, vec![]).unwrap(), PriceTable::empty(None));
    }
}
