use std::cell::RefCell;
use std::rc::Rc;

use super::state::{AppState, UiEvent};

/// Dispatch a start-recording request on the tokio runtime. The recording
/// flag flips only once the service has accepted the call; a failure is
/// logged and leaves state untouched.
pub fn dispatch_start_recording(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    let client = s.backend.clone();
    let sender = s.ui_sender.clone();

    s.tokio_rt.spawn(async move {
        match client.start_recording().await {
            Ok(()) => {
                log::info!("Started recording");
                let _ = sender.send(UiEvent::RecordingStarted).await;
            }
            Err(e) => log::error!("Error starting recording: {e}"),
        }
    });
}

/// Dispatch a stop-recording request on the tokio runtime.
pub fn dispatch_stop_recording(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    let client = s.backend.clone();
    let sender = s.ui_sender.clone();

    s.tokio_rt.spawn(async move {
        match client.stop_recording().await {
            Ok(()) => {
                log::info!("Stopped recording");
                let _ = sender.send(UiEvent::RecordingStopped).await;
            }
            Err(e) => log::error!("Error stopping recording: {e}"),
        }
    });
}

/// Dispatch a playback request for `file`. Playback happens on the service's
/// own output, so there is no state to update on success.
pub fn dispatch_play_audio(state: &Rc<RefCell<AppState>>, file: String) {
    let s = state.borrow();
    let client = s.backend.clone();

    s.tokio_rt.spawn(async move {
        match client.play_audio(&file).await {
            Ok(()) => log::info!("Requested playback of {file}"),
            Err(e) => log::error!("Error playing {file}: {e}"),
        }
    });
}
