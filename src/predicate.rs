//! Boolean filter expressions over [`Record`]s.
//!
//! A [`Predicate`] is a small, side-effect-free expression tree supporting field
//! equality, set membership, negation, and conjunction. The statistics pipeline
//! composes these for queries like "advanced education AND above-threshold salary".
//!
//! ```rust
//! use demographic_analyzer::predicate::Predicate;
//! use demographic_analyzer::types::{CategoryField, Record, SalaryBand};
//!
//! let rich_graduate = Predicate::all(vec![
//!     Predicate::category_in(
//!         CategoryField::Education,
//!         ["Bachelors", "Masters", "Doctorate"],
//!     ),
//!     Predicate::salary(SalaryBand::AboveThreshold),
//! ]);
//!
//! let record = Record {
//!     race: "White".to_string(),
//!     sex: "Female".to_string(),
//!     age: 41,
//!     education: "Masters".to_string(),
//!     salary_band: SalaryBand::AboveThreshold,
//!     hours_per_week: 50,
//!     native_country: "United-States".to_string(),
//!     occupation: "Exec-managerial".to_string(),
//! };
//! assert!(rich_graduate.eval(&record));
//! ```

use crate::types::{CategoryField, Record, SalaryBand};

/// A boolean filter expression over a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// A category field equals the given value.
    CategoryEquals(CategoryField, String),
    /// A category field's value is a member of the given set.
    CategoryIn(CategoryField, Vec<String>),
    /// The record's salary band equals the given band.
    SalaryIs(SalaryBand),
    /// The record's hours-per-week equals the given value.
    HoursPerWeekIs(u32),
    /// Logical complement of the inner predicate.
    Not(Box<Predicate>),
    /// Logical conjunction: true iff every inner predicate is true.
    All(Vec<Predicate>),
}

impl Predicate {
    /// Field equality predicate.
    pub fn category_equals(field: CategoryField, value: impl Into<String>) -> Self {
        Self::CategoryEquals(field, value.into())
    }

    /// Set-membership predicate.
    pub fn category_in<I, S>(field: CategoryField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CategoryIn(field, values.into_iter().map(Into::into).collect())
    }

    /// Salary band equality predicate.
    pub fn salary(band: SalaryBand) -> Self {
        Self::SalaryIs(band)
    }

    /// Hours-per-week equality predicate.
    pub fn hours_per_week(hours: u32) -> Self {
        Self::HoursPerWeekIs(hours)
    }

    /// Complement of `self`.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Conjunction of `predicates`.
    ///
    /// An empty conjunction is vacuously true.
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Self::All(predicates)
    }

    /// Evaluate this predicate against a record. No side effects.
    pub fn eval(&self, record: &Record) -> bool {
        match self {
            Self::CategoryEquals(field, value) => field.value(record) == value,
            Self::CategoryIn(field, values) => {
                let v = field.value(record);
                values.iter().any(|candidate| candidate == v)
            }
            Self::SalaryIs(band) => record.salary_band == *band,
            Self::HoursPerWeekIs(hours) => record.hours_per_week == *hours,
            Self::Not(inner) => !inner.eval(record),
            Self::All(predicates) => predicates.iter().all(|p| p.eval(record)),
        }
    }
}
