//! Left join of two grouped-count tables plus per-key percentages.

use std::collections::BTreeMap;

use crate::analysis::grouping::GroupedCount;
use crate::analysis::ratio;
use crate::error::{AnalysisError, AnalysisResult};

/// One joined row: a group's numerator count, its total, and the resulting rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioRow {
    /// Records in the group satisfying the numerator predicate.
    pub count: u64,
    /// All records observed in the group.
    pub total: u64,
    /// `count / total * 100`, rounded to one decimal (half-to-even).
    pub percentage: f64,
}

/// A numerator count table left-joined against its denominator count table,
/// with a computed percentage per key.
///
/// Keys are exactly the numerator table's keys, in ascending lexical order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatioTable {
    rows: BTreeMap<String, RatioRow>,
}

impl RatioTable {
    /// Join `numerators` against `totals`, keyed by the same group key.
    ///
    /// Left-join policy: every key of `numerators` must appear in the result.
    /// A key absent from `totals` means the two tables were not derived from
    /// the same record population and fails with [`AnalysisError::MissingGroup`];
    /// the join validates this rather than assuming it. A group whose total is
    /// zero cannot occur through [`crate::analysis::group_count`] (empty
    /// partitions are never materialized), but is still rejected by the ratio
    /// engine rather than producing a non-finite rate.
    pub fn left_join(numerators: &GroupedCount, totals: &GroupedCount) -> AnalysisResult<Self> {
        let mut rows = BTreeMap::new();
        for (key, count) in numerators.iter() {
            let total = totals
                .get(key)
                .ok_or_else(|| AnalysisError::MissingGroup {
                    key: key.to_string(),
                })?;
            let percentage = ratio::percentage(count, total, key)?;
            rows.insert(
                key.to_string(),
                RatioRow {
                    count,
                    total,
                    percentage,
                },
            );
        }
        Ok(Self { rows })
    }

    /// The joined row for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&RatioRow> {
        self.rows.get(key)
    }

    /// Iterate `(key, row)` pairs in ascending lexical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RatioRow)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `(key, percentage)` pairs in ascending lexical key order, ready for ranking.
    pub fn percentages(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .map(|(k, row)| (k.clone(), row.percentage))
            .collect()
    }

    /// Number of joined keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
