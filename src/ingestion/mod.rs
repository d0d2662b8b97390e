//! Record loading (the "record store" collaborator).
//!
//! Most callers should use [`load_records`], which:
//!
//! - loads the survey CSV into an in-memory [`crate::types::Dataset`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The CSV-specific functions are also available under [`csv`].

use std::path::Path;
use std::sync::Arc;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::Dataset;

pub mod csv;
pub mod observability;

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};

/// Options controlling record loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    ///
    /// `None` disables alerting entirely.
    pub alert_at_or_above: Option<LoadSeverity>,
}

impl std::fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Load survey records from a CSV file path.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use demographic_analyzer::ingestion::{load_records, LoadOptions, LoadSeverity, StdErrObserver};
///
/// # fn main() -> Result<(), demographic_analyzer::AnalysisError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: Some(LoadSeverity::Critical),
/// };
/// let ds = load_records("adult.data.csv", &opts)?;
/// println!("records={}", ds.len());
/// # Ok(())
/// # }
/// ```
pub fn load_records(path: impl AsRef<Path>, options: &LoadOptions) -> AnalysisResult<Dataset> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = csv::load_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(&ctx, LoadStats { records: ds.len() }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if let Some(threshold) = options.alert_at_or_above {
                    if sev >= threshold {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &AnalysisError) -> LoadSeverity {
    match e {
        AnalysisError::Io(_) => LoadSeverity::Critical,
        AnalysisError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
