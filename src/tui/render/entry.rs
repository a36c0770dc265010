use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::model::task::PLACEHOLDER;
use crate::tui::app::{App, Mode};

/// Render the entry field (top of screen).
///
/// Empty and unfocused shows the placeholder sentinel in a dim style;
/// focusing hides it, mirroring the original focus-in/focus-out toggling
/// as derived state rather than widget mutation.
pub fn render_entry(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;

    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let inner_w = area.width.saturating_sub(2) as usize;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let line = if app.input.is_empty() && !focused {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        let (before, after) = app.input.split_at(app.input_cursor);
        // Keep the cursor in view: tail of the text before it, then the rest
        let cursor_w = if focused { 1 } else { 0 };
        let before = fit_tail(before, inner_w.saturating_sub(cursor_w));
        let mut used: usize = before.chars().map(|c| c.width().unwrap_or(0)).sum();
        used += cursor_w;

        let mut spans = vec![Span::styled(before.to_string(), text_style)];
        if focused {
            // ▌ cursor
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        spans.push(Span::styled(
            fit_head(after, inner_w.saturating_sub(used)).to_string(),
            text_style,
        ));
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Longest suffix of `s` no wider than `max_w` columns
fn fit_tail(s: &str, max_w: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_w {
            break;
        }
        width += w;
        start = i;
    }
    &s[start..]
}

/// Longest prefix of `s` no wider than `max_w` columns
fn fit_head(s: &str, max_w: usize) -> &str {
    let mut width = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max_w {
            return &s[..i];
        }
        width += w;
    }
    s
}
