use std::sync::{Arc, Mutex};

use demographic_analyzer::ingestion::{
    load_records, LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats,
};
use demographic_analyzer::AnalysisError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats.records);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &AnalysisError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &AnalysisError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

#[test]
fn observer_receives_success_with_record_count() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Some(LoadSeverity::Critical),
    };

    let ds = load_records("tests/fixtures/survey.csv", &opts).unwrap();
    assert_eq!(ds.len(), 4);

    assert_eq!(obs.successes.lock().unwrap().clone(), vec![4]);
    assert!(obs.failures.lock().unwrap().is_empty());
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Some(LoadSeverity::Critical),
    };

    // Missing file -> Io error -> Critical
    let _ = load_records("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![LoadSeverity::Critical]
    );
    assert_eq!(
        obs.alerts.lock().unwrap().clone(),
        vec![LoadSeverity::Critical]
    );
}

#[test]
fn observer_receives_failure_without_alert_for_non_critical_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: Some(LoadSeverity::Critical),
    };

    // Missing salary column -> schema mismatch -> Error severity, no alert
    let _ = load_records("tests/fixtures/missing_salary.csv", &opts).unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![LoadSeverity::Error]
    );
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn alerting_disabled_when_no_threshold_set() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
        alert_at_or_above: None,
    };

    let _ = load_records("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    assert_eq!(
        obs.failures.lock().unwrap().clone(),
        vec![LoadSeverity::Critical]
    );
    assert!(obs.alerts.lock().unwrap().is_empty());
}
