// Login screen
//
// Loading and failure states take over the whole content area. Once the
// class list is in, the user picks a class and confirms the access token.

use crate::tui::app::App;
use crate::tui::login_form::{ClassList, LoginField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let classes = match &app.login.classes {
        ClassList::Loading => {
            let loading = Paragraph::new(format!("{} Loading...", app.spinner_char()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.info));
            f.render_widget(loading, centered_line(area));
            return;
        }
        ClassList::Failed(message) => {
            let error = Paragraph::new(vec![
                Line::styled(
                    format!("Error: {}", message),
                    Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
                ),
                Line::raw(""),
                Line::styled("Press q to quit.", Style::default().fg(theme.muted)),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(error, area);
            return;
        }
        ClassList::Ready(classes) => classes,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(area);

    // Intro
    let mut intro = vec![Line::styled(
        "Select your class, then confirm your access token.",
        Style::default().fg(theme.foreground),
    )];
    if let Some(client_id) = &app.client_id {
        intro.push(Line::styled(
            format!("Token must be issued for OAuth client {}", client_id),
            Style::default().fg(theme.muted),
        ));
    }
    f.render_widget(Paragraph::new(intro).wrap(Wrap { trim: true }), chunks[0]);

    // Class list
    let list_focused = app.login.field == LoginField::Classes;
    let items: Vec<ListItem> = classes
        .iter()
        .enumerate()
        .map(|(idx, class)| {
            let chosen = app.login.selected.as_deref() == Some(class.as_str());
            let marker = if chosen { "● " } else { "○ " };
            let style = if list_focused && idx == app.login.cursor {
                theme.selected_style()
            } else if chosen {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(format!("{}{}", marker, class)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(list_focused))
            .title(" Select your class "),
    );
    let mut state = ListState::default().with_selected(Some(app.login.cursor));
    f.render_stateful_widget(list, chunks[1], &mut state);

    // Token field
    let token_focused = app.login.field == LoginField::Token;
    let cursor = if token_focused { "▏" } else { "" };
    let token = Paragraph::new(format!("{}{}", app.login.masked_token(), cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(token_focused))
            .title(" Access token "),
    );
    f.render_widget(token, chunks[2]);

    // Login button
    let (label, style) = if app.login.submitting {
        (
            format!("{} Signing in...", app.spinner_char()),
            Style::default().fg(theme.info),
        )
    } else if app.login.can_submit() {
        (
            "[ Enter ] Log in".to_string(),
            Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
        )
    } else {
        ("Log in (choose a class and enter a token)".to_string(), Style::default().fg(theme.muted))
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
        chunks[3],
    );
}

/// One-line rect in the vertical middle of `area`
fn centered_line(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height))
}
