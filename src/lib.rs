//! `demographic-analyzer` is a small library for loading a census-style survey CSV
//! into an in-memory [`types::Dataset`] and computing a fixed battery of summary
//! statistics over it: racial composition, mean age of men, education/salary
//! breakdowns, minimum work hours, and ranked per-country earning rates.
//!
//! The primary entrypoints are [`ingestion::load_records`] (CSV file into a
//! [`types::Dataset`]) and [`pipeline::summarize`] (dataset into a
//! [`pipeline::DemographicSummary`]).
//!
//! ## Quick example: load and summarize
//!
//! ```no_run
//! use demographic_analyzer::ingestion::{load_records, LoadOptions};
//! use demographic_analyzer::pipeline::summarize;
//! use demographic_analyzer::report;
//!
//! # fn main() -> Result<(), demographic_analyzer::AnalysisError> {
//! let ds = load_records("adult.data.csv", &LoadOptions::default())?;
//! let summary = summarize(&ds)?;
//! println!("{}", report::render(&summary));
//! # Ok(())
//! # }
//! ```
//!
//! ## Processing example (in-memory dataset)
//!
//! ```rust
//! use demographic_analyzer::pipeline::summarize;
//! use demographic_analyzer::types::{Dataset, Record, SalaryBand};
//!
//! let record = |sex: &str, age, education: &str, country: &str, band| Record {
//!     race: "White".to_string(),
//!     sex: sex.to_string(),
//!     age,
//!     education: education.to_string(),
//!     salary_band: band,
//!     hours_per_week: 40,
//!     native_country: country.to_string(),
//!     occupation: "Prof-specialty".to_string(),
//! };
//! let ds = Dataset::new(vec![
//!     record("Male", 30, "Bachelors", "India", SalaryBand::AboveThreshold),
//!     record("Male", 40, "Bachelors", "India", SalaryBand::AtOrBelowThreshold),
//!     record("Female", 50, "HS-grad", "US", SalaryBand::AtOrBelowThreshold),
//! ]);
//!
//! let summary = summarize(&ds).unwrap();
//! assert_eq!(summary.average_age_men, 35.0);
//! assert_eq!(summary.percentage_bachelors, 66.7);
//! assert_eq!(summary.highest_earning_country, "India");
//! assert_eq!(summary.highest_earning_country_percentage, 50.0);
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV record loading with optional load observability
//! - [`types`]: record + dataset types
//! - [`predicate`]: boolean filter expressions over records
//! - [`analysis`]: grouping, ratio, join, and ranking components
//! - [`pipeline`]: the ten-statistic orchestrator
//! - [`report`]: human-readable rendering of a summary
//! - [`error`]: error types used across loading and analysis
//!
//! ## Error policy
//!
//! All analysis errors are terminal for a run: a ratio whose denominator group
//! has zero members ([`AnalysisError::DivisionByZero`]), a join key missing from
//! its denominator table ([`AnalysisError::MissingGroup`]), or an aggregate over
//! zero records ([`AnalysisError::EmptyDataset`]) aborts the pipeline. The ten
//! statistics are reported together or not at all.

pub mod analysis;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod predicate;
pub mod report;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
