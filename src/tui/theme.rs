use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub red: Color,
    /// Pending (not yet completed) task rows
    pub pending: Color,
    /// Completed task rows
    pub done: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6C, 0x6C, 0x80),
            highlight: Color::Rgb(0x5F, 0xAF, 0xFF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            pending: Color::Rgb(0xFF, 0xA5, 0x00),
            done: Color::Rgb(0x22, 0xA5, 0x44),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x40),
        }
    }
}

/// Parse a hex color string like "#FFA500" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "red" => theme.red = color,
                    "pending" => theme.pending = color,
                    "done" => theme.done = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }
        theme
    }

    /// Row color for a task: derived from the completion flag, never stored
    pub fn task_color(&self, completed: bool) -> Color {
        if completed { self.done } else { self.pending }
    }
}
