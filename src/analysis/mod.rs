//! Core analysis components over [`crate::types::Dataset`].
//!
//! The analysis layer is a one-way pipeline of small, purely in-memory stages:
//!
//! - [`grouping`]: partition records by a key field and count members per group
//! - [`ratio`]: percentages between two counts, with banker's rounding and an
//!   explicit zero-denominator error
//! - [`join`]: left-join a numerator count table against a denominator count
//!   table and compute a percentage per key
//! - [`rank`]: deterministic (metric descending, key ascending) ordering with
//!   explicit top-1 selection
//!
//! ## Example: group → join → rank
//!
//! ```rust
//! use demographic_analyzer::analysis::{group_count, rank_descending, top, RatioTable};
//! use demographic_analyzer::predicate::Predicate;
//! use demographic_analyzer::types::{CategoryField, Dataset, Record, SalaryBand};
//!
//! # fn main() -> Result<(), demographic_analyzer::AnalysisError> {
//! let record = |country: &str, band| Record {
//!     race: "White".to_string(),
//!     sex: "Male".to_string(),
//!     age: 40,
//!     education: "Bachelors".to_string(),
//!     salary_band: band,
//!     hours_per_week: 40,
//!     native_country: country.to_string(),
//!     occupation: "Sales".to_string(),
//! };
//! let ds = Dataset::new(vec![
//!     record("India", SalaryBand::AboveThreshold),
//!     record("India", SalaryBand::AtOrBelowThreshold),
//!     record("US", SalaryBand::AtOrBelowThreshold),
//! ]);
//!
//! let above = ds.filter_records(|r| {
//!     Predicate::salary(SalaryBand::AboveThreshold).eval(r)
//! });
//! let numerators = group_count(&above, CategoryField::NativeCountry)?;
//! let totals = group_count(&ds, CategoryField::NativeCountry)?;
//!
//! let table = RatioTable::left_join(&numerators, &totals)?;
//! let ranked = rank_descending(table.percentages());
//! let best = top(&ranked).unwrap();
//! assert_eq!(best.key, "India");
//! assert_eq!(best.metric, 50.0);
//! # Ok(())
//! # }
//! ```

pub mod grouping;
pub mod join;
pub mod rank;
pub mod ratio;

pub use grouping::{count_matching, group_count, group_count_by, GroupedCount};
pub use join::{RatioRow, RatioTable};
pub use rank::{rank_descending, top, RankedEntry};
pub use ratio::{percentage, round1};
