use crossterm::event::KeyEvent;

use crate::tui::app::App;

/// Any key dismisses the modal
pub(super) fn handle_popup(app: &mut App, _key: KeyEvent) {
    app.popup = None;
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::tui::app::Popup;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::test_app;

    #[test]
    fn any_key_dismisses_popup() {
        let (mut app, _dir) = test_app(&[]);
        app.popup = Some(Popup::Error("nope".into()));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE),
        );
        assert_eq!(app.popup, None);
    }

    #[test]
    fn popup_swallows_the_dismissing_key() {
        let (mut app, _dir) = test_app(&["Buy milk"]);
        app.popup = Some(Popup::Error("nope".into()));
        // 'd' would delete in list mode; here it only closes the popup
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
        );
        assert_eq!(app.store.tasks().len(), 1);
    }
}
