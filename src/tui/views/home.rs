// Authenticated screen
//
// Welcome block on top, then sidebar, segment list and content side by
// side. On compact terminals the navigation panes stack above the content.

use crate::tui::app::App;
use crate::tui::components::{segment_list, segment_view, sidebar};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    render_welcome(f, rows[0], app);

    if app.data.loading {
        let loading = Paragraph::new(format!("{} Loading...", app.spinner_char()))
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.info));
        f.render_widget(loading, rows[1]);
        return;
    }

    if let Some(message) = &app.data.user_message {
        let notice = Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.warn));
        f.render_widget(notice, rows[1]);
        return;
    }

    if !app.data.has_courses() {
        let empty = Paragraph::new("No courses found for this class.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.muted));
        f.render_widget(empty, rows[1]);
        return;
    }

    let bp = Breakpoint::from_width(rows[1].width);
    let panes = if bp.is_columns() {
        let (sidebar_width, segments_width) = bp.nav_widths();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sidebar_width),
                Constraint::Length(segments_width),
                Constraint::Min(20),
            ])
            .split(rows[1])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Length(5),
                Constraint::Min(5),
            ])
            .split(rows[1])
    };

    sidebar::render(f, panes[0], app);
    segment_list::render(f, panes[1], app);
    segment_view::render(f, panes[2], app);
}

fn render_welcome(f: &mut Frame, area: Rect, app: &App) {
    let Some(identity) = app.session.current() else {
        return;
    };
    let theme = &app.theme;

    let lines = vec![
        Line::styled(
            format!(" Welcome, {}", identity.greeting_name()),
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(" {} · class {}", identity.email, identity.class_id),
            Style::default().fg(theme.muted),
        ),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
