//! Grouped counting over [`Dataset`]s.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::{AnalysisError, AnalysisResult};
use crate::predicate::Predicate;
use crate::types::{CategoryField, Dataset, Record};

/// A count of records per group key, with keys in ascending lexical order.
///
/// Keys are exactly the distinct values observed in the partitioned field; a key
/// with zero matching records never appears. Ascending enumeration order is
/// load-bearing: downstream ranking relies on it for deterministic tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedCount {
    counts: BTreeMap<String, u64>,
}

impl GroupedCount {
    /// The count for `key`, if the key was observed.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Iterate `(key, count)` pairs in ascending lexical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no keys were observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of counts across all keys.
    ///
    /// Equals the size of the grouped dataset, since every record lands in
    /// exactly one partition.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Partition `dataset` by a category field and count members per partition.
///
/// Fails with [`AnalysisError::EmptyDataset`] when invoked on zero records,
/// matching the policy for all aggregates in this crate.
pub fn group_count(dataset: &Dataset, field: CategoryField) -> AnalysisResult<GroupedCount> {
    group_count_by(dataset, |record| field.value(record).to_string())
}

/// Partition `dataset` by an arbitrary key function and count members.
///
/// The key function can build compound keys from several fields; single-field
/// grouping is the common case via [`group_count`].
pub fn group_count_by<F>(dataset: &Dataset, key_fn: F) -> AnalysisResult<GroupedCount>
where
    F: Fn(&Record) -> String,
{
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for record in dataset.records() {
        *counts.entry(key_fn(record)).or_insert(0) += 1;
    }
    Ok(GroupedCount { counts })
}

/// Count the records of `dataset` matching `predicate`.
///
/// Counting is independent per record, so it runs in parallel across the dataset.
/// Zero matches is an ordinary result here, not an error; only ratio computation
/// treats a zero denominator as failure.
pub fn count_matching(dataset: &Dataset, predicate: &Predicate) -> u64 {
    dataset
        .records()
        .par_iter()
        .filter(|record| predicate.eval(record))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::{count_matching, group_count, group_count_by};
    use crate::error::AnalysisError;
    use crate::predicate::Predicate;
    use crate::types::{CategoryField, Dataset, Record, SalaryBand};

    fn record(race: &str, country: &str, band: SalaryBand) -> Record {
        Record {
            race: race.to_string(),
            sex: "Male".to_string(),
            age: 33,
            education: "HS-grad".to_string(),
            salary_band: band,
            hours_per_week: 40,
            native_country: country.to_string(),
            occupation: "Craft-repair".to_string(),
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            record("White", "US", SalaryBand::AtOrBelowThreshold),
            record("Black", "US", SalaryBand::AboveThreshold),
            record("White", "India", SalaryBand::AboveThreshold),
            record("White", "US", SalaryBand::AtOrBelowThreshold),
        ])
    }

    #[test]
    fn group_count_partitions_and_sorts_keys() {
        let ds = sample_dataset();
        let counts = group_count(&ds, CategoryField::Race).unwrap();

        let pairs: Vec<(&str, u64)> = counts.iter().collect();
        assert_eq!(pairs, vec![("Black", 1), ("White", 3)]);
        assert_eq!(counts.get("White"), Some(3));
        assert_eq!(counts.get("Asian-Pac-Islander"), None);
    }

    #[test]
    fn group_count_totals_match_dataset_size() {
        let ds = sample_dataset();
        for field in [
            CategoryField::Race,
            CategoryField::Sex,
            CategoryField::NativeCountry,
        ] {
            let counts = group_count(&ds, field).unwrap();
            assert_eq!(counts.total(), ds.len() as u64);
        }
    }

    #[test]
    fn group_count_is_order_independent() {
        let ds = sample_dataset();
        let mut reversed: Vec<Record> = ds.records().to_vec();
        reversed.reverse();
        let reversed = Dataset::new(reversed);

        assert_eq!(
            group_count(&ds, CategoryField::Race).unwrap(),
            group_count(&reversed, CategoryField::Race).unwrap()
        );
    }

    #[test]
    fn group_count_fails_on_empty_dataset() {
        let err = group_count(&Dataset::default(), CategoryField::Race).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDataset));
    }

    #[test]
    fn group_count_by_supports_compound_keys() {
        let ds = sample_dataset();
        let counts = group_count_by(&ds, |r| {
            format!("{}/{}", r.native_country, r.salary_band.label())
        })
        .unwrap();

        assert_eq!(counts.get("US/<=50K"), Some(2));
        assert_eq!(counts.get("US/>50K"), Some(1));
        assert_eq!(counts.get("India/>50K"), Some(1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn count_matching_counts_predicate_hits() {
        let ds = sample_dataset();
        let above = Predicate::salary(SalaryBand::AboveThreshold);
        assert_eq!(count_matching(&ds, &above), 2);

        let none = Predicate::category_equals(CategoryField::Race, "Other");
        assert_eq!(count_matching(&ds, &none), 0);
    }
}
