// Segment list component - the segments of the selected course

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Segments;
    let names = app.segment_names();

    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let active = *name == app.drill.segment;
            let style = if focused && idx == app.segment_cursor {
                theme.selected_style()
            } else if active {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(name.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(" Segments "),
    );

    let mut state = ListState::default().with_selected(Some(app.segment_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
