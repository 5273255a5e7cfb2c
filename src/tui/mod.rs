// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - The event loop (keyboard input, timer ticks, finished requests)
// - Running the commands App emits on background tasks

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod login_form;
pub mod modal;
pub mod theme;
pub mod views;

use crate::config::Config;
use crate::gateway::Gateway;
use crate::identity::IdentityProvider;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, AppEvent, Command};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Backends the event loop hands work to
#[derive(Clone)]
pub struct Services {
    pub gateway: Arc<dyn Gateway>,
    pub identity: Arc<dyn IdentityProvider>,
}

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, services: Services) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer, services.gateway.name());

    let result = run_event_loop(&mut terminal, &mut app, services).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (spinner frames, toast expiry)
/// 3. Finished requests coming back from spawned tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    services: Services,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(120));
    let (tx, mut rx) = mpsc::channel::<AppEvent>(32);

    let startup = app.startup();
    dispatch(app, &services, &tx, startup);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        if let Some(command) = app.handle_key(key_event) {
                            dispatch(app, &services, &tx, command);
                        }
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(finished) = rx.recv() => {
                if let Some(command) = app.apply(finished) {
                    dispatch(app, &services, &tx, command);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run a command. Network work goes to its own task and reports back over
/// `tx`; clipboard writes happen inline.
fn dispatch(app: &mut App, services: &Services, tx: &mpsc::Sender<AppEvent>, command: Command) {
    match command {
        Command::Copy(text) => {
            app.copy_finished(clipboard::copy_text(&text));
        }
        Command::LoadClasses => {
            let gateway = services.gateway.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = gateway.list_classes().await;
                let _ = tx.send(AppEvent::ClassesLoaded(result)).await;
            });
        }
        Command::ResolveIdentity { token, class_id } => {
            let identity = services.identity.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = identity.fetch_profile(&token).await;
                let _ = tx
                    .send(AppEvent::IdentityResolved {
                        token,
                        class_id,
                        result,
                    })
                    .await;
            });
        }
        Command::FetchCourses(request) => {
            let gateway = services.gateway.clone();
            let tx = tx.clone();
            tracing::debug!(class = %request.class, "Fetching course data");
            tokio::spawn(async move {
                let result = gateway.fetch_course_data(&request).await;
                let _ = tx.send(AppEvent::CoursesFetched(result)).await;
            });
        }
    }
}
