// Help overlay - keyboard shortcuts

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.title);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Login", header_style)),
        kb("↑/↓, j/k", "Highlight a class"),
        kb("Enter", "Choose class / log in"),
        kb("Tab, Esc", "Switch class list / token field"),
        kb("Ctrl+U", "Clear token"),
        Line::raw(""),
        Line::from(Span::styled("  Dashboard", header_style)),
        kb("Tab", "Focus next pane"),
        kb("Shift+Tab", "Focus previous pane"),
        kb("↑/↓, j/k", "Move / scroll"),
        kb("Enter", "Open course, segment or month"),
        kb("y", "Copy segment as text"),
        kb("x", "Log out"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Toggle light/dark"),
        kb("L", "Toggle logs panel"),
        kb("?", "This help"),
        kb("q, Ctrl+C", "Quit"),
        Line::raw(""),
    ]);

    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(52, height, f.area());

    let help = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border_focused))
            .title(" Keys ")
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
