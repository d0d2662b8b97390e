//! Core data model types for demographic analysis.
//!
//! This crate loads a census-style survey CSV into an in-memory [`Dataset`] of typed,
//! immutable [`Record`]s, then computes summary statistics over it.

use serde::Serialize;

/// Whether a surveyed individual earns at/below or above the salary threshold.
///
/// This is the only truly closed category in the source data (the raw file carries
/// `<=50K` / `>50K` labels); all other categories are open-ended strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SalaryBand {
    /// Salary at or below the threshold (`<=50K`).
    AtOrBelowThreshold,
    /// Salary above the threshold (`>50K`).
    AboveThreshold,
}

impl SalaryBand {
    /// Parse a salary band from its raw source label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "<=50K" => Some(Self::AtOrBelowThreshold),
            ">50K" => Some(Self::AboveThreshold),
            _ => None,
        }
    }

    /// The raw source label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AtOrBelowThreshold => "<=50K",
            Self::AboveThreshold => ">50K",
        }
    }
}

/// Selector for the open-ended category columns of a [`Record`].
///
/// Used as the grouping key and as the field side of equality/membership predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    /// The `race` column.
    Race,
    /// The `sex` column.
    Sex,
    /// The `education` column.
    Education,
    /// The `native-country` column.
    NativeCountry,
    /// The `occupation` column.
    Occupation,
}

impl CategoryField {
    /// The value of this category field on `record`.
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Self::Race => &record.race,
            Self::Sex => &record.sex,
            Self::Education => &record.education,
            Self::NativeCountry => &record.native_country,
            Self::Occupation => &record.occupation,
        }
    }
}

/// One surveyed individual.
///
/// Records are immutable once loaded; the analysis pipeline only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Race category.
    pub race: String,
    /// Sex category.
    pub sex: String,
    /// Age in years.
    pub age: u32,
    /// Education level category.
    pub education: String,
    /// Salary band relative to the threshold.
    pub salary_band: SalaryBand,
    /// Hours worked per week.
    pub hours_per_week: u32,
    /// Native country category.
    pub native_country: String,
    /// Occupation category.
    pub occupation: String,
}

/// In-memory, insertion-ordered collection of [`Record`]s.
///
/// Order is the load order of the source file. It carries no analytical meaning;
/// grouped keys are always enumerated in ascending lexical order downstream, so
/// analysis results are independent of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from already-loaded records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// The returned dataset preserves the original record order.
    pub fn filter_records<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self { records }
    }
}
