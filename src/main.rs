mod app;
mod backend;
mod config;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::glib;
use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppState, UiEvent};
use config::Config;

fn main() {
    env_logger::init();
    log::info!("Audio Console starting");

    let application = libadwaita::Application::builder()
        .application_id("com.github.audio-console")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // Create async channel for backend → UI communication
    let (ui_tx, ui_rx) = async_channel::unbounded::<UiEvent>();

    // Build app state
    let state = Rc::new(RefCell::new(AppState::new(Config::load(), ui_tx)));
    log::info!(
        "Using recorder service at {}",
        state.borrow().config.backend_base_url
    );

    // Build UI
    let window = ui::window::build_window(app, "Idle");

    // Wire up the recording controls
    {
        let state_clone = state.clone();
        window.start_button.connect_clicked(move |_| {
            app::dispatch_start_recording(&state_clone);
        });
    }
    {
        let state_clone = state.clone();
        window.stop_button.connect_clicked(move |_| {
            app::dispatch_stop_recording(&state_clone);
        });
    }

    // Release the poll task when the window is torn down
    {
        let state_clone = state.clone();
        window.window.connect_close_request(move |_| {
            if let Some(task) = state_clone.borrow_mut().poll_task.take() {
                task.abort();
            }
            glib::Propagation::Proceed
        });
    }

    // Store UI handles in state
    state.borrow_mut().window = Some(window);

    // Show the window
    state.borrow().window.as_ref().unwrap().window.present();

    // Attach backend event handler
    {
        let state_clone = state.clone();
        glib::spawn_future_local(async move {
            while let Ok(event) = ui_rx.recv().await {
                app::handle_ui_event(&state_clone, event);
            }
        });
    }

    // Start the periodic file-list refresh; the first fetch fires right away
    {
        let s = state.borrow();
        let task = app::spawn_file_poller(
            s.tokio_rt.handle(),
            s.backend.clone(),
            s.ui_sender.clone(),
            app::POLL_PERIOD,
        );
        drop(s);
        state.borrow_mut().poll_task = Some(task);
    }
}
