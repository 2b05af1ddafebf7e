use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::app::AppState;

/// Handles returned from building the main window.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub status_label: gtk4::Label,
    pub recording_banner: libadwaita::Banner,
    pub start_button: gtk4::Button,
    pub stop_button: gtk4::Button,
    pub file_list: gtk4::ListBox,
    pub play_buttons: Rc<RefCell<Vec<gtk4::Button>>>,
}

/// Build the main window.
pub fn build_window(app: &libadwaita::Application, initial_status: &str) -> WindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title("Audio Console")
        .default_width(450)
        .default_height(560)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();
    toolbar_view.add_top_bar(&header);

    // Revealed while a recording session is believed active.
    let recording_banner = libadwaita::Banner::new("Cannot play while recording active");
    toolbar_view.add_top_bar(&recording_banner);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(16);
    content.set_margin_end(16);
    content.set_margin_top(12);
    content.set_margin_bottom(12);

    // --- Capture group ---
    let capture_group = libadwaita::PreferencesGroup::new();
    capture_group.set_title("Capture");

    let status_row = libadwaita::ActionRow::builder()
        .title("Current State")
        .build();
    let status_label = gtk4::Label::new(Some(initial_status));
    status_label.add_css_class("dim-label");
    status_row.add_suffix(&status_label);
    capture_group.add(&status_row);

    let controls_row = libadwaita::ActionRow::builder()
        .title("Recording")
        .build();
    let start_button = gtk4::Button::builder()
        .label("Start Recording")
        .valign(gtk4::Align::Center)
        .build();
    start_button.add_css_class("suggested-action");
    let stop_button = gtk4::Button::builder()
        .label("Stop Recording")
        .valign(gtk4::Align::Center)
        .build();
    controls_row.add_suffix(&start_button);
    controls_row.add_suffix(&stop_button);
    capture_group.add(&controls_row);

    content.append(&capture_group);
    content.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // --- Detected files group ---
    let files_group = libadwaita::PreferencesGroup::new();
    files_group.set_title("Detected Audio Files");
    files_group.set_margin_top(12);

    let file_list = gtk4::ListBox::new();
    file_list.set_selection_mode(gtk4::SelectionMode::None);
    file_list.add_css_class("boxed-list");

    let placeholder = gtk4::Label::new(Some("No recordings yet"));
    placeholder.add_css_class("dim-label");
    placeholder.set_margin_top(12);
    placeholder.set_margin_bottom(12);
    file_list.set_placeholder(Some(&placeholder));

    files_group.add(&file_list);
    content.append(&files_group);

    // Assemble
    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vexpand(true)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));
    window.set_content(Some(&toolbar_view));

    WindowWidgets {
        window,
        status_label,
        recording_banner,
        start_button,
        stop_button,
        file_list,
        play_buttons: Rc::new(RefCell::new(Vec::new())),
    }
}

/// Rebuild the file rows from the current snapshot. Each row carries a Play
/// button wired to a playback request for that row's file.
pub fn rebuild_file_rows(state: &Rc<RefCell<AppState>>) {
    let (files, can_play, list, buttons) = {
        let s = state.borrow();
        match s.window {
            Some(ref win) => (
                s.audio_files.clone(),
                s.can_play(),
                win.file_list.clone(),
                win.play_buttons.clone(),
            ),
            None => return,
        }
    };

    while let Some(row) = list.row_at_index(0) {
        list.remove(&row);
    }
    buttons.borrow_mut().clear();

    for file in files {
        let row = libadwaita::ActionRow::builder()
            .title(file.as_str())
            .build();

        let play_button = gtk4::Button::builder()
            .label("Play")
            .valign(gtk4::Align::Center)
            .build();
        play_button.set_sensitive(can_play);
        {
            let state_clone = state.clone();
            let file_clone = file.clone();
            play_button.connect_clicked(move |_| {
                crate::app::dispatch_play_audio(&state_clone, file_clone.clone());
            });
        }

        row.add_suffix(&play_button);
        list.append(&row);
        buttons.borrow_mut().push(play_button);
    }
}

/// Update the widgets that track the recording flag: the warning banner and
/// the sensitivity of every Play button.
pub fn set_recording_active(win: &WindowWidgets, recording: bool) {
    win.recording_banner.set_revealed(recording);
    for button in win.play_buttons.borrow().iter() {
        button.set_sensitive(!recording);
    }
}
