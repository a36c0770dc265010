use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let hint = match app.mode {
        Mode::List => " a add  j/k move  x complete  d delete  s summary  q quit",
        Mode::Input => " Enter add  Esc back",
    };

    let line = Line::from(Span::styled(
        hint,
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn list_mode_hints() {
        let (app, _dir) = test_app(&[]);
        let text = render_to_string(60, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(text.contains("s summary"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn input_mode_hints() {
        let (mut app, _dir) = test_app(&[]);
        app.mode = Mode::Input;
        let text = render_to_string(60, 1, |frame, area| render_status_row(frame, &app, area));
        assert!(text.contains("Enter add"));
        assert!(text.contains("Esc back"));
    }
}
