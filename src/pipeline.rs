//! The statistics pipeline: ten named summary statistics over one dataset.
//!
//! [`summarize`] sequences the analysis components (predicates, grouped counts,
//! ratios, joins, ranking) over a single immutable [`Dataset`] and assembles a
//! [`DemographicSummary`] only after every statistic succeeds. Any failure
//! (zero-member denominator group, inconsistent join, empty dataset) aborts the
//! whole run; the ten statistics are expected together or not at all.

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::{
    count_matching, group_count, rank_descending, ratio, top, RatioTable,
};
use crate::error::{AnalysisError, AnalysisResult};
use crate::predicate::Predicate;
use crate::types::{CategoryField, Dataset, SalaryBand};

/// Education levels counted as advanced for the education/salary breakdowns.
pub const ADVANCED_EDUCATION: [&str; 3] = ["Bachelors", "Masters", "Doctorate"];

/// The country used for the top-occupation statistic.
pub const TOP_OCCUPATION_COUNTRY: &str = "India";

/// The ten summary statistics computed by [`summarize`].
///
/// `race_count` is an ordered mapping (race, count) descending by count with
/// ties broken by race ascending; all other values are scalars. Percentages are
/// rounded to one decimal, half-to-even.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicSummary {
    /// Count of records per race, descending by count.
    pub race_count: Vec<(String, u64)>,
    /// Mean age of records with `sex == "Male"`, one decimal.
    pub average_age_men: f64,
    /// Share of all records with a Bachelors education.
    pub percentage_bachelors: f64,
    /// Share of advanced-education records earning above the threshold.
    pub higher_education_rich: f64,
    /// Share of non-advanced-education records earning above the threshold.
    pub lower_education_rich: f64,
    /// Minimum hours-per-week over all records.
    pub min_work_hours: u32,
    /// Share of minimum-hours workers earning above the threshold.
    pub rich_percentage: f64,
    /// Country with the highest share of above-threshold earners.
    pub highest_earning_country: String,
    /// That country's share of above-threshold earners.
    pub highest_earning_country_percentage: f64,
    /// Most common occupation among above-threshold earners in India.
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: String,
}

impl DemographicSummary {
    /// Serialize the summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Compute all ten summary statistics over `dataset`.
///
/// The dataset is read-only throughout; each statistic is an independent pure
/// computation over the same records (per-record counting work runs in parallel,
/// but no statistic depends on another's evaluation order). Errors are terminal:
/// no partial summary is ever returned.
pub fn summarize(dataset: &Dataset) -> AnalysisResult<DemographicSummary> {
    let total_records = dataset.len() as u64;

    // 1. Races, descending by count (ties by race ascending).
    let races = group_count(dataset, CategoryField::Race)?;
    let race_count: Vec<(String, u64)> =
        rank_descending(races.iter().map(|(k, c)| (k.to_string(), c)))
            .into_iter()
            .map(|entry| (entry.key, entry.metric))
            .collect();

    // 2. Mean age of men.
    let (age_sum, men) = dataset
        .records()
        .par_iter()
        .filter(|r| r.sex == "Male")
        .map(|r| (u64::from(r.age), 1u64))
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    if men == 0 {
        return Err(AnalysisError::DivisionByZero {
            context: "average_age_men".to_string(),
        });
    }
    let average_age_men = ratio::round1(age_sum as f64 / men as f64);

    // 3. Bachelors share of the whole dataset.
    let bachelors = Predicate::category_equals(CategoryField::Education, "Bachelors");
    let percentage_bachelors = ratio::percentage(
        count_matching(dataset, &bachelors),
        total_records,
        "percentage_bachelors",
    )?;

    // 4./5. Above-threshold share inside and outside advanced education.
    let advanced = Predicate::category_in(CategoryField::Education, ADVANCED_EDUCATION);
    let above = Predicate::salary(SalaryBand::AboveThreshold);
    let higher_education_rich = ratio::percentage(
        count_matching(
            dataset,
            &Predicate::all(vec![advanced.clone(), above.clone()]),
        ),
        count_matching(dataset, &advanced),
        "higher_education_rich",
    )?;
    let not_advanced = advanced.negate();
    let lower_education_rich = ratio::percentage(
        count_matching(
            dataset,
            &Predicate::all(vec![not_advanced.clone(), above.clone()]),
        ),
        count_matching(dataset, &not_advanced),
        "lower_education_rich",
    )?;

    // 6. Minimum hours worked per week.
    let min_work_hours = dataset
        .records()
        .iter()
        .map(|r| r.hours_per_week)
        .min()
        .ok_or(AnalysisError::EmptyDataset)?;

    // 7. Above-threshold share among minimum-hours workers.
    let at_min_hours = Predicate::hours_per_week(min_work_hours);
    let rich_percentage = ratio::percentage(
        count_matching(
            dataset,
            &Predicate::all(vec![at_min_hours.clone(), above.clone()]),
        ),
        count_matching(dataset, &at_min_hours),
        "rich_percentage",
    )?;

    // 8. Country with the highest share of above-threshold earners.
    let above_view = dataset.filter_records(|r| above.eval(r));
    let numerators = group_count(&above_view, CategoryField::NativeCountry)?;
    let totals = group_count(dataset, CategoryField::NativeCountry)?;
    let by_country = RatioTable::left_join(&numerators, &totals)?;
    let ranked_countries = rank_descending(by_country.percentages());
    let best_country = top(&ranked_countries).ok_or(AnalysisError::EmptyDataset)?;

    // 9. Most common occupation among above-threshold earners in India.
    let in_country = Predicate::all(vec![
        above.clone(),
        Predicate::category_equals(CategoryField::NativeCountry, TOP_OCCUPATION_COUNTRY),
    ]);
    let country_view = dataset.filter_records(|r| in_country.eval(r));
    let occupations = group_count(&country_view, CategoryField::Occupation)?;
    let ranked_occupations =
        rank_descending(occupations.iter().map(|(k, c)| (k.to_string(), c)));
    let top_occupation = top(&ranked_occupations).ok_or(AnalysisError::EmptyDataset)?;

    Ok(DemographicSummary {
        race_count,
        average_age_men,
        percentage_bachelors,
        higher_education_rich,
        lower_education_rich,
        min_work_hours,
        rich_percentage,
        highest_earning_country: best_country.key.clone(),
        highest_earning_country_percentage: best_country.metric,
        top_in_occupation: top_occupation.key.clone(),
    })
}
