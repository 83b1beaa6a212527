use longevity::{
    AssessmentRecord, HistoryError, HistoryStore, ModelVersion, HISTORY_CAPACITY,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The only history store the service ships: newest-first, capped in memory.
#[derive(Default)]
pub(crate) struct InMemoryHistoryStore {
    records: Mutex<Vec<AssessmentRecord>>,
}

impl HistoryStore for InMemoryHistoryStore {
    fn push(&self, record: AssessmentRecord) -> Result<(), HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        guard.insert(0, record);
        guard.truncate(HISTORY_CAPACITY);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.iter().take(limit).cloned().collect())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.records.lock().expect("history mutex poisoned").clear();
        Ok(())
    }
}

/// Parses a `--model` argument; mirrors the `APP_MODEL` environment values.
pub(crate) fn parse_model(raw: &str) -> Result<ModelVersion, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "baseline" => Ok(ModelVersion::Baseline),
        "extended" => Ok(ModelVersion::Extended),
        other => Err(format!("expected 'baseline' or 'extended', got '{other}'")),
    }
}
