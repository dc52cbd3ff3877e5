//! Fixed-width time bucketing over ordered rows.

use chrono::{Duration, NaiveDateTime};

/// Partition sorted rows into left-closed, left-labeled buckets of `width`
/// anchored at `origin`, reducing each non-empty bucket with `reduce`.
///
/// Bucket `k` covers `[origin + k*width, origin + (k+1)*width)` and is
/// labeled by its start. Rows must be sorted by `key`; rows before `origin`
/// land in negative buckets. Buckets without rows are skipped, so the
/// reducer always sees at least one row.
pub fn bucket_by_time<T, R, K, F>(
    rows: &[T],
    origin: NaiveDateTime,
    width: Duration,
    key: K,
    mut reduce: F,
) -> Vec<R>
where
    K: Fn(&T) -> NaiveDateTime,
    F: FnMut(NaiveDateTime, &[T]) -> R,
{
    let width_ms = width.num_milliseconds();
    if width_ms <= 0 || rows.is_empty() {
        return Vec::new();
    }

    let bucket_of = |row: &T| (key(row) - origin).num_milliseconds().div_euclid(width_ms);

    let mut out = Vec::new();
    let mut start = 0;

    while start < rows.len() {
        let bucket = bucket_of(&rows[start]);
        let end = rows[start..]
            .iter()
            .position(|r| bucket_of(r) != bucket)
            .map_or(rows.len(), |offset| start + offset);

        let label = origin + Duration::milliseconds(bucket * width_ms);
        out.push(reduce(label, &rows[start..end]));
        start = end;
    }

    out
}
