// Camera configuration store.
//
// Entrance/exit RTSP URLs plus a single message field that carries
// both save confirmations and failures, matching the inline-message
// design of the configuration form.

use attendly_api::{CameraConfig, Error as ApiError};
use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
pub struct ConfigureState {
    pub entrance_url: String,
    pub exit_url: String,
    pub message: Option<String>,
    pub loading: bool,
    pub fetching: bool,
}

pub struct ConfigureStore {
    tx: watch::Sender<ConfigureState>,
}

impl Default for ConfigureStore {
    fn default() -> Self {
        let (tx, _) = watch::channel(ConfigureState::default());
        Self { tx }
    }
}

impl ConfigureStore {
    /// Fetch clears the current URLs first: the form never shows a
    /// previous deployment's cameras while loading.
    pub fn begin_fetch(&self) {
        self.tx.send_modify(|s| {
            s.loading = true;
            s.fetching = true;
            s.entrance_url.clear();
            s.exit_url.clear();
            s.message = None;
        });
    }

    pub fn fetched(&self, config: &CameraConfig) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.fetching = false;
            s.entrance_url = config.camera_enter.clone();
            s.exit_url = config.camera_exit.clone();
            s.message = None;
        });
    }

    pub fn begin_save(&self) {
        self.tx.send_modify(|s| {
            s.loading = true;
            s.message = None;
        });
    }

    pub fn saved(&self) {
        self.tx.send_modify(|s| {
            s.loading = false;
            s.message = Some("Configuration saved".into());
        });
    }

    pub fn failed(&self, err: &ApiError) {
        let detail = err.detail();
        self.tx.send_modify(|s| {
            s.loading = false;
            s.fetching = false;
            s.message = Some(detail);
        });
    }

    pub fn current(&self) -> ConfigureState {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_clears_urls_while_loading() {
        let store = ConfigureStore::default();
        store.fetched(&CameraConfig {
            camera_enter: "rtsp://cam1".into(),
            camera_exit: "rtsp://cam2".into(),
        });
        store.begin_fetch();
        let state = store.current();
        assert!(state.entrance_url.is_empty() && state.exit_url.is_empty());
        assert!(state.fetching);
    }

    #[test]
    fn save_success_and_failure_both_land_in_message() {
        let store = ConfigureStore::default();
        store.begin_save();
        store.saved();
        assert_eq!(store.current().message.as_deref(), Some("Configuration saved"));

        store.begin_save();
        store.failed(&ApiError::Api {
            status: 400,
            message: "invalid RTSP URL".into(),
        });
        assert_eq!(store.current().message.as_deref(), Some("invalid RTSP URL"));
    }
}
