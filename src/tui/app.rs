use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{config_io, store_io};
use crate::model::task::TaskId;
use crate::ops::store::{Summary, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode: navigating the list or typing in the entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Input,
}

/// Modal overlay currently shown, if any. Popups intercept all input;
/// any key dismisses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    Error(String),
    Summary(Summary),
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// Entry field buffer
    pub input: String,
    /// Byte offset of the entry cursor within `input`
    pub input_cursor: usize,
    /// Selected task. Keyed by id so the selection survives re-sorts.
    pub selected: Option<TaskId>,
    /// First visible row of the task list
    pub scroll_offset: usize,
    pub popup: Option<Popup>,
}

impl App {
    pub fn new(store: TaskStore, theme: Theme) -> Self {
        let selected = store.tasks().first().map(|t| t.id);
        App {
            store,
            mode: Mode::List,
            theme,
            should_quit: false,
            input: String::new(),
            input_cursor: 0,
            selected,
            scroll_offset: 0,
            popup: None,
        }
    }

    /// Position of the selected task in the displayed (sorted) order
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.store.tasks().iter().position(|t| t.id == id)
    }

    /// Move the selection up or down, clamping at the ends
    pub fn move_selection(&mut self, delta: isize) {
        let tasks = self.store.tasks();
        if tasks.is_empty() {
            self.selected = None;
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, tasks.len() as isize - 1) as usize;
        self.selected = Some(tasks[next].id);
    }

    /// Select the task at a display index, clamping into range
    pub fn select_index(&mut self, index: usize) {
        let tasks = self.store.tasks();
        self.selected = if tasks.is_empty() {
            None
        } else {
            Some(tasks[index.min(tasks.len() - 1)].id)
        };
    }

    // --- Entry field editing (char-boundary safe) ---

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_char_boundary(&self.input, self.input_cursor) {
            self.input.replace_range(prev..self.input_cursor, "");
            self.input_cursor = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(prev) = prev_char_boundary(&self.input, self.input_cursor) {
            self.input_cursor = prev;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = next_char_boundary(&self.input, self.input_cursor) {
            self.input_cursor = next;
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }
}

fn prev_char_boundary(s: &str, at: usize) -> Option<usize> {
    s[..at].chars().next_back().map(|c| at - c.len_utf8())
}

fn next_char_boundary(s: &str, at: usize) -> Option<usize> {
    s[at..].chars().next().map(|c| at + c.len_utf8())
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(&cwd)?;
    let theme = Theme::from_config(&config.ui);
    let store = TaskStore::open(cwd.join(store_io::DATA_FILE))?;
    let mut app = App::new(store, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
