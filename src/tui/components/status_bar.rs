// Status bar component
//
// One line at the bottom: loading spinner or the user message, then key
// hints for the focused screen. Hints shrink on narrow terminals.

use crate::session::Route;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let (state, state_style) = if app.data.loading || app.login.submitting {
        (
            format!(" {} Loading...", app.spinner_char()),
            Style::default().fg(theme.info),
        )
    } else if let Some(message) = &app.data.user_message {
        (format!(" {}", message), Style::default().fg(theme.warn))
    } else {
        (String::new(), Style::default().fg(theme.muted))
    };

    let hints = match (app.route(), bp.is_columns()) {
        (Route::Login, true) => "↑↓ class · Enter choose · Tab token · L logs · q quit",
        (Route::Login, false) => "Tab · Enter · q",
        (Route::Home, true) => "Tab focus · ↑↓ move · Enter open · y copy · L logs · q quit",
        (Route::Home, false) => "Tab · Enter · y · q",
    };

    let line = Line::from(vec![
        Span::styled(state, state_style),
        Span::styled(format!("  {}", hints), Style::default().fg(theme.muted)),
    ]);

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}
