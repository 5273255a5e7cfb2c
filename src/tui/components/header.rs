// Header component
//
// App name, backend, theme indicator and the logged-in student. The right
// edge carries the key hints for help and logout.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let backend = if app.backend == "demo" { " [demo]" } else { "" };
    let student = match app.session.current() {
        Some(identity) => format!(" ──── {} · {}", identity.email, identity.class_id),
        None => String::new(),
    };
    let title_text = format!(" 🎓 classdash{}{}", backend, student);

    let hints = match app.session.current() {
        Some(_) => format!(" {} · t · x logout · ? ", theme.mode.as_str()),
        None => format!(" {} · t · ? ", theme.mode.as_str()),
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(Line::from(hints).right_aligned()),
        );

    f.render_widget(title, area);
}
