// Views module - screen-level rendering
//
// Two screens, chosen from the session alone:
// - Login: class list and access token field
// - Home: course navigation and segment content
//
// The shell (header, optional logs panel, status bar) surrounds both.

mod help;
mod home;
mod login;

use super::app::App;
use super::modal::Modal;
use crate::session::Route;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel when shown
const LOGS_HEIGHT: u16 = 8;

/// Main render function, called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(logs_height),
            Constraint::Length(2),
        ])
        .split(f.area());

    components::header::render(f, chunks[0], app);

    match app.route() {
        Route::Login => login::render(f, chunks[1], app),
        Route::Home => home::render(f, chunks[1], app),
    }

    if app.show_logs {
        components::logs_panel::render(f, chunks[2], app);
    }
    components::status_bar::render(f, chunks[3], app);

    if let Some(Modal::Help) = app.modal {
        help::render(f, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
