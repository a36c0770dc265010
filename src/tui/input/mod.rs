mod entry;
mod list;
mod popup;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Modal popups intercept all input
    if app.popup.is_some() {
        popup::handle_popup(app, key);
        return;
    }

    match app.mode {
        Mode::List => list::handle_list(app, key),
        Mode::Input => entry::handle_entry(app, key),
    }
}
