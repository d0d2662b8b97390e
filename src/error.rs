use thiserror::Error;

/// Convenience result type for load and analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by record loading and the statistics pipeline.
///
/// Analysis errors are terminal for a pipeline run: the orchestrator propagates
/// them instead of producing a partial report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/decode error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the expected survey layout (missing columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into its typed field.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A ratio's denominator group has zero members, so its rate is undefined.
    #[error("division by zero: denominator group for '{context}' has no members")]
    DivisionByZero { context: String },

    /// A join key present in a numerator table is absent from its denominator table.
    ///
    /// Indicates inconsistent partitioning of the same record population.
    #[error("group '{key}' present in numerator table but missing from denominator table")]
    MissingGroup { key: String },

    /// An aggregate (min, mean, group-by) was invoked on zero records.
    #[error("dataset contains no records")]
    EmptyDataset,
}
