use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store_io::DATA_FILE;
use crate::ops::store::TaskStore;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 18;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over a fresh store with the given pending tasks.
/// The TempDir must outlive the App so saves have somewhere to land.
pub fn test_app(texts: &[&str]) -> (App, TempDir) {
    let records: Vec<(&str, bool)> = texts.iter().map(|t| (*t, false)).collect();
    test_app_with(&records)
}

/// Build an App with explicit (text, completed) pairs
pub fn test_app_with(records: &[(&str, bool)]) -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut store = TaskStore::open(dir.path().join(DATA_FILE)).unwrap();
    for (text, completed) in records {
        let id = store.add(text).unwrap();
        if *completed {
            store.complete(id).unwrap();
        }
    }
    (App::new(store, Theme::default()), dir)
}
