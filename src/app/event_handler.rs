use std::cell::RefCell;
use std::rc::Rc;

use super::state::{update_status, AppState, UiEvent};
use crate::ui::window::{rebuild_file_rows, set_recording_active};

/// Apply a backend event to state and sync the widgets. This is the core
/// state machine: the file list is replaced wholesale on every successful
/// poll, and the recording flag flips only on confirmed start/stop calls.
pub fn handle_ui_event(state: &Rc<RefCell<AppState>>, event: UiEvent) {
    match event {
        UiEvent::FilesFetched(files) => {
            log::debug!("Fetched {} audio files", files.len());
            state.borrow_mut().audio_files = files;
            rebuild_file_rows(state);
        }
        UiEvent::RecordingStarted => {
            state.borrow_mut().recording = true;
            update_status(state, "Recording...");
            sync_recording_widgets(state);
        }
        UiEvent::RecordingStopped => {
            state.borrow_mut().recording = false;
            update_status(state, "Idle");
            sync_recording_widgets(state);
        }
    }
}

fn sync_recording_widgets(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    if let Some(ref win) = s.window {
        set_recording_active(win, s.recording);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    // No window handles are attached, so these exercise the state
    // transitions without touching GTK.
    fn headless_state() -> Rc<RefCell<AppState>> {
        let (tx, _rx) = async_channel::unbounded();
        Rc::new(RefCell::new(AppState::new(Config::default(), tx)))
    }

    #[test]
    fn poll_replaces_list_wholesale() {
        let state = headless_state();
        handle_ui_event(&state, UiEvent::FilesFetched(vec!["a.wav".into(), "b.wav".into()]));
        assert_eq!(state.borrow().audio_files, vec!["a.wav", "b.wav"]);

        handle_ui_event(&state, UiEvent::FilesFetched(vec!["c.wav".into()]));
        assert_eq!(state.borrow().audio_files, vec!["c.wav"]);
    }

    #[test]
    fn server_order_and_duplicates_are_kept() {
        let state = headless_state();
        let files = vec!["b.wav".into(), "a.wav".into(), "a.wav".into()];
        handle_ui_event(&state, UiEvent::FilesFetched(files.clone()));
        assert_eq!(state.borrow().audio_files, files);
    }

    #[test]
    fn start_and_stop_cycle_the_recording_flag() {
        let state = headless_state();
        assert!(state.borrow().can_play());

        handle_ui_event(&state, UiEvent::RecordingStarted);
        assert!(state.borrow().recording);
        assert!(!state.borrow().can_play());

        // A repeated confirmation is idempotent.
        handle_ui_event(&state, UiEvent::RecordingStarted);
        assert!(state.borrow().recording);

        handle_ui_event(&state, UiEvent::RecordingStopped);
        assert!(!state.borrow().recording);
        assert!(state.borrow().can_play());
    }

    #[test]
    fn recording_transitions_leave_the_list_alone() {
        let state = headless_state();
        handle_ui_event(&state, UiEvent::FilesFetched(vec!["a.wav".into(), "b.wav".into()]));

        handle_ui_event(&state, UiEvent::RecordingStarted);
        assert_eq!(state.borrow().audio_files, vec!["a.wav", "b.wav"]);

        handle_ui_event(&state, UiEvent::RecordingStopped);
        assert_eq!(state.borrow().audio_files, vec!["a.wav", "b.wav"]);
    }
}
