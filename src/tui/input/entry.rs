use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::command::{self, Command, CommandError, Outcome};
use crate::ops::store::StoreError;
use crate::tui::app::{App, Mode, Popup};

pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Focus out: typed text stays, placeholder returns only when empty
        (_, KeyCode::Esc) => app.mode = Mode::List,
        (_, KeyCode::Enter) => submit(app),
        (_, KeyCode::Backspace) => app.backspace(),
        (KeyModifiers::NONE, KeyCode::Left) => app.cursor_left(),
        (KeyModifiers::NONE, KeyCode::Right) => app.cursor_right(),
        (KeyModifiers::NONE, KeyCode::Home) => app.input_cursor = 0,
        (KeyModifiers::NONE, KeyCode::End) => app.input_cursor = app.input.len(),
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.insert_char(c);
        }
        _ => {}
    }
}

fn submit(app: &mut App) {
    match command::dispatch(&mut app.store, Command::Add(app.input.clone())) {
        Ok(Outcome::Added(id)) => {
            app.clear_input();
            app.selected = Some(id);
            app.mode = Mode::List;
        }
        Ok(_) => {}
        Err(e) => {
            // Entry text is kept so the user can fix it after dismissing
            let message = match e {
                CommandError::Store(StoreError::EmptyText | StoreError::PlaceholderText) => {
                    "Please enter a valid task.".to_string()
                }
                other => other.to_string(),
            };
            app.popup = Some(Popup::Error(message));
        }
    }
}
