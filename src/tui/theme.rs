// Light and dark palettes for the TUI
//
// The palette is picked from the config at startup and flipped with 't'.
// Every component reads colors from here; nothing hard-codes a color.

use crate::config::ThemeMode;
use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Complete palette for one mode
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and emphasis
    pub title: Color,
    pub highlight: Color,
    pub heading: Color,

    // Selection
    pub selection: Color,
    pub selection_fg: Color,
    /// Course that is open in the detail pane
    pub active: Color,

    // Data
    pub label: Color,
    pub value: Color,
    pub missing: Color,
    pub present: Color,

    // Status
    pub error: Color,
    pub warn: Color,
    pub info: Color,
    pub debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,

            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            highlight: Color::Yellow,
            heading: Color::LightMagenta,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,
            active: Color::LightGreen,

            label: Color::Gray,
            value: Color::White,
            missing: Color::DarkGray,
            present: Color::Green,

            error: Color::Red,
            warn: Color::Yellow,
            info: Color::LightBlue,
            debug: Color::Gray,
        }
    }

    pub fn light() -> Self {
        let goldenrod = Color::Rgb(184, 134, 11);
        Self {
            mode: ThemeMode::Light,

            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            highlight: goldenrod,
            heading: Color::Magenta,

            selection: Color::LightBlue,
            selection_fg: Color::Black,
            active: Color::Rgb(0, 128, 0),

            label: Color::DarkGray,
            value: Color::Black,
            missing: Color::Gray,
            present: Color::Rgb(0, 128, 0),

            error: Color::Red,
            warn: goldenrod,
            info: Color::Blue,
            debug: Color::DarkGray,
        }
    }

    /// Border style for a panel, brighter when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for a highlighted list row
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Color for a log level in the logs panel
    pub fn log_style(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
            LogLevel::Warn => Style::default().fg(self.warn),
            LogLevel::Info => Style::default().fg(self.info),
            LogLevel::Debug | LogLevel::Trace => Style::default().fg(self.debug),
        }
    }
}
