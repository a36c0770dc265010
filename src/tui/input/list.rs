use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::command::{self, Command, CommandError, Outcome};
use crate::ops::store::StoreError;
use crate::tui::app::{App, Mode, Popup};

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.mode = Mode::Input;
        }
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => app.move_selection(1),
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => app.move_selection(-1),
        (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('x')) => complete_selected(app),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => delete_selected(app),
        (KeyModifiers::NONE, KeyCode::Char('s')) => show_summary(app),
        _ => {}
    }
}

pub(super) fn complete_selected(app: &mut App) {
    if let Err(e) = command::dispatch(&mut app.store, Command::Complete(app.selected)) {
        app.popup = Some(Popup::Error(error_message(&e, "complete")));
    }
}

pub(super) fn delete_selected(app: &mut App) {
    let index = app.selected_index();
    match command::dispatch(&mut app.store, Command::Delete(app.selected)) {
        Ok(_) => {
            // Keep the cursor at the same display position, clamped
            match index {
                Some(i) => app.select_index(i),
                None => app.selected = None,
            }
        }
        Err(e) => app.popup = Some(Popup::Error(error_message(&e, "delete"))),
    }
}

pub(super) fn show_summary(app: &mut App) {
    if let Ok(Outcome::Summary(summary)) = command::dispatch(&mut app.store, Command::Summary) {
        app.popup = Some(Popup::Summary(summary));
    }
}

/// User-facing dialog text per error, matching the store's taxonomy
fn error_message(error: &CommandError, action: &str) -> String {
    match error {
        CommandError::NoSelection => {
            format!("Please select the task you want to {}.", action)
        }
        CommandError::Store(StoreError::EmptyText | StoreError::PlaceholderText) => {
            "Please enter a valid task.".to_string()
        }
        CommandError::Store(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::test_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits() {
        let (mut app, _dir) = test_app(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn a_enters_input_mode() {
        let (mut app, _dir) = test_app(&[]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn j_and_k_move_selection() {
        let (mut app, _dir) = test_app(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_index(), Some(1));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_index(), Some(0));
    }

    #[test]
    fn x_completes_the_selected_task() {
        let (mut app, _dir) = test_app(&["Buy milk"]);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.store.tasks()[0].completed);
        assert_eq!(app.popup, None);
    }

    #[test]
    fn complete_with_no_selection_shows_error() {
        let (mut app, _dir) = test_app(&[]);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(
            app.popup,
            Some(Popup::Error(
                "Please select the task you want to complete.".into()
            ))
        );
    }

    #[test]
    fn delete_with_no_selection_shows_error() {
        let (mut app, _dir) = test_app(&[]);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.popup,
            Some(Popup::Error(
                "Please select the task you want to delete.".into()
            ))
        );
    }

    #[test]
    fn delete_moves_selection_to_neighbor() {
        let (mut app, _dir) = test_app(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        // "b" gone, cursor lands on "c" (same display position)
        assert_eq!(app.store.tasks().len(), 2);
        let idx = app.selected_index().unwrap();
        assert_eq!(app.store.tasks()[idx].text, "c");
    }

    #[test]
    fn deleting_the_last_task_clears_selection() {
        let (mut app, _dir) = test_app(&["only"]);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.tasks().is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn s_shows_the_summary_popup() {
        let (mut app, _dir) = test_app(&["a", "b"]);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('s'));
        let Some(Popup::Summary(summary)) = app.popup else {
            panic!("expected summary popup");
        };
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
    }
}
