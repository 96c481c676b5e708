// Recognition model store.
//
// A thin control panel over an asynchronous backend job: start, stop,
// status, generate embeddings. Log lines accumulate across actions.
// There is deliberately no polling loop: status refreshes only on an
// explicit action, so the displayed state can go stale while a long
// embedding run churns.

use attendly_api::{Error as ApiError, ModelState};
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct ModelPanelState {
    pub status: ModelState,
    pub logs: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ModelPanelState {
    fn default() -> Self {
        Self {
            status: ModelState::Stopped,
            logs: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

pub struct ModelStore {
    tx: watch::Sender<ModelPanelState>,
}

impl Default for ModelStore {
    fn default() -> Self {
        let (tx, _) = watch::channel(ModelPanelState::default());
        Self { tx }
    }
}

impl ModelStore {
    pub fn begin(&self, log_line: &str) {
        let line = log_line.to_owned();
        self.tx.send_modify(|s| {
            s.loading = true;
            s.logs.push(line);
        });
    }

    pub fn started(&self, message: String) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.status = ModelState::Running;
            s.logs.push(message);
        });
    }

    pub fn stopped(&self, message: String) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.status = ModelState::Stopped;
            s.logs.push(message);
        });
    }

    pub fn embeddings_generated(&self, lines: Vec<String>) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.logs.extend(lines);
        });
    }

    pub fn status_read(&self, status: ModelState) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.status = status;
        });
    }

    /// Failures land in the log stream as well as the error field, so
    /// the panel's history shows what went wrong between actions.
    pub fn failed(&self, err: &ApiError) {
        let detail = err.detail();
        self.tx.send_modify(|s| {
            s.loading = false;
            s.logs.push(format!("error: {detail}"));
            s.error = Some(detail);
        });
    }

    pub fn clear_logs(&self) {
        self.tx.send_modify(|s| s.logs.clear());
    }

    pub fn current(&self) -> ModelPanelState {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_accumulate_across_actions() {
        let store = ModelStore::default();
        store.begin("Starting model...");
        store.started("Both models started.".into());
        store.begin("Generating employee embeddings...");
        store.embeddings_generated(vec!["E1: 4 embeddings".into()]);

        let state = store.current();
        assert_eq!(state.logs.len(), 4);
        assert_eq!(state.status, ModelState::Running);
    }

    #[test]
    fn status_is_only_as_fresh_as_the_last_read() {
        let store = ModelStore::default();
        store.started("started".into());
        // No polling: nothing changes the status until an explicit read.
        assert_eq!(store.current().status, ModelState::Running);
        store.status_read(ModelState::Stopped);
        assert_eq!(store.current().status, ModelState::Stopped);
    }

    #[test]
    fn failure_is_logged_and_recorded() {
        let store = ModelStore::default();
        store.begin("Stopping model...");
        store.failed(&ApiError::Api {
            status: 500,
            message: "no pipeline running".into(),
        });
        let state = store.current();
        assert_eq!(state.error.as_deref(), Some("no pipeline running"));
        assert!(state.logs.last().expect("log line").contains("no pipeline running"));
    }
}
