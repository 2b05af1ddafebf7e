use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::BackendClient;
use crate::config::Config;
use crate::ui::window::WindowWidgets;

/// Events sent from backend tasks to the GTK main thread.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A poll succeeded; this is the new file-list snapshot.
    FilesFetched(Vec<String>),
    /// The service accepted a start-recording request.
    RecordingStarted,
    /// The service accepted a stop-recording request.
    RecordingStopped,
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    /// True while a recording session is believed active. This is the
    /// client's own belief after a successful start/stop call; the service
    /// exposes no status read to reconcile against.
    pub recording: bool,
    /// Most recently fetched file-list snapshot, in server order.
    pub audio_files: Vec<String>,
    pub config: Config,
    pub backend: BackendClient,
    pub tokio_rt: tokio::runtime::Runtime,
    pub ui_sender: async_channel::Sender<UiEvent>,

    // Poll task handle, aborted on window close
    pub poll_task: Option<tokio::task::JoinHandle<()>>,

    // UI handles
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(config: Config, sender: async_channel::Sender<UiEvent>) -> Self {
        let backend = BackendClient::new(config.backend_base_url.clone());
        let tokio_rt = tokio::runtime::Runtime::new()
            .expect("Failed to create tokio runtime");

        Self {
            recording: false,
            audio_files: Vec::new(),
            config,
            backend,
            tokio_rt,
            ui_sender: sender,
            poll_task: None,
            window: None,
        }
    }

    /// Playback is offered whenever no recording session is believed active.
    pub fn can_play(&self) -> bool {
        !self.recording
    }
}

/// Helper to update the status row label.
pub fn update_status(state: &Rc<RefCell<AppState>>, label_text: &str) {
    let s = state.borrow();
    if let Some(ref win) = s.window {
        win.status_label.set_text(label_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_empty_list() {
        let (tx, _rx) = async_channel::unbounded();
        let state = AppState::new(Config::default(), tx);
        assert!(!state.recording);
        assert!(state.audio_files.is_empty());
        assert!(state.can_play());
    }
}
