use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the task list (middle of screen).
///
/// Tasks appear in the store's sorted order; completion is carried by
/// color only, so completed tasks do not sink to the bottom.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;

    if app.store.tasks().is_empty() {
        app.scroll_offset = 0;
        let hint = Line::from(Span::styled(
            "  no tasks — press a to add one",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().bg(bg)),
            area,
        );
        return;
    }

    // Keep the selected row visible
    let len = app.store.tasks().len();
    if let Some(index) = app.selected_index()
        && height > 0
    {
        if index < app.scroll_offset {
            app.scroll_offset = index;
        } else if index >= app.scroll_offset + height {
            app.scroll_offset = index + 1 - height;
        }
    }
    if app.scroll_offset + height > len {
        app.scroll_offset = len.saturating_sub(height);
    }

    let mut lines = Vec::new();
    for task in app.store.tasks().iter().skip(app.scroll_offset).take(height) {
        let selected = app.selected == Some(task.id);
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let color = app.theme.task_color(task.completed);

        let mut style = Style::default().fg(color).bg(row_bg);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }

        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        lines.push(Line::from(vec![
            Span::styled(
                if selected { "\u{276F} " } else { "  " },
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ),
            Span::styled(checkbox, style),
            Span::styled(task.text.clone(), style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
