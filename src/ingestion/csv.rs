//! CSV record loading.

use std::path::Path;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{Dataset, Record, SalaryBand};

/// Survey columns required by the analysis pipeline.
///
/// The source file carries more columns (workclass, fnlwgt, capital-gain, ...);
/// anything not listed here is ignored.
const AGE: &str = "age";
const EDUCATION: &str = "education";
const OCCUPATION: &str = "occupation";
const RACE: &str = "race";
const SEX: &str = "sex";
const HOURS_PER_WEEK: &str = "hours-per-week";
const NATIVE_COUNTRY: &str = "native-country";
const SALARY: &str = "salary";

struct ColumnIndexes {
    age: usize,
    education: usize,
    occupation: usize,
    race: usize,
    sex: usize,
    hours_per_week: usize,
    native_country: usize,
    salary: usize,
}

/// Load a survey CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all required columns (order can differ; extra columns
///   are ignored).
/// - `age` and `hours-per-week` parse as unsigned integers; `salary` must be one
///   of the two threshold labels.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> AnalysisResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load survey records from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> AnalysisResult<Dataset> {
    let headers = rdr.headers()?.clone();
    let cols = resolve_columns(&headers)?;

    let mut records: Vec<Record> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let raw = result?;

        let get = |idx: usize| raw.get(idx).unwrap_or("").trim();

        records.push(Record {
            race: get(cols.race).to_owned(),
            sex: get(cols.sex).to_owned(),
            age: parse_u32(user_row, AGE, get(cols.age))?,
            education: get(cols.education).to_owned(),
            salary_band: parse_salary(user_row, get(cols.salary))?,
            hours_per_week: parse_u32(user_row, HOURS_PER_WEEK, get(cols.hours_per_week))?,
            native_country: get(cols.native_country).to_owned(),
            occupation: get(cols.occupation).to_owned(),
        });
    }

    Ok(Dataset::new(records))
}

fn resolve_columns(headers: &csv::StringRecord) -> AnalysisResult<ColumnIndexes> {
    let index_of = |name: &str| -> AnalysisResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AnalysisError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })
    };

    Ok(ColumnIndexes {
        age: index_of(AGE)?,
        education: index_of(EDUCATION)?,
        occupation: index_of(OCCUPATION)?,
        race: index_of(RACE)?,
        sex: index_of(SEX)?,
        hours_per_week: index_of(HOURS_PER_WEEK)?,
        native_country: index_of(NATIVE_COUNTRY)?,
        salary: index_of(SALARY)?,
    })
}

fn parse_u32(row: usize, column: &str, raw: &str) -> AnalysisResult<u32> {
    raw.parse::<u32>().map_err(|e| AnalysisError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

fn parse_salary(row: usize, raw: &str) -> AnalysisResult<SalaryBand> {
    SalaryBand::from_label(raw).ok_or_else(|| AnalysisError::ParseError {
        row,
        column: SALARY.to_owned(),
        raw: raw.to_owned(),
        message: "expected salary label '<=50K' or '>50K'".to_string(),
    })
}
