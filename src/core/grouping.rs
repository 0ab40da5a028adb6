use indexmap::IndexMap;
use tracing::debug;

use crate::core::types::CountryRecord;

/// Year-keyed row buckets, insertion-ordered: year keys appear in first-seen
/// order and rows keep source order within their bucket.
pub type YearGroups = IndexMap<i32, Vec<CountryRecord>>;

/// Partitions rows into per-year buckets.
///
/// Every input row lands in exactly one bucket keyed by its own year; the
/// grouping is deterministic for a given input sequence. Rows with invalid
/// numeric fields never reach this point (see `ingest`).
#[must_use]
pub fn group_by_year(rows: Vec<CountryRecord>) -> YearGroups {
    let row_count = rows.len();
    let mut groups: YearGroups = IndexMap::new();
    for row in rows {
        groups.entry(row.year).or_default().push(row);
    }
    debug!(row_count, year_count = groups.len(), "grouped rows by year");
    groups
}
