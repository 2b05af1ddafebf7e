mod actions;
mod event_handler;
mod poller;
mod state;

pub use actions::{dispatch_play_audio, dispatch_start_recording, dispatch_stop_recording};
pub use event_handler::handle_ui_event;
pub use poller::{spawn_file_poller, POLL_PERIOD};
pub use state::{AppState, UiEvent};
