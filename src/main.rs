// classdash - terminal dashboard for class records
//
// A student signs in with an access token from the identity provider, picks
// their class, and browses attendance, scores and roll data per course.
//
// Architecture:
// - Gateway (reqwest): class list and course data from the records backend
// - Identity: resolves the token to a profile via the user-info endpoint
// - Categorize / drill-down: pure data shaping for the course tree
// - TUI (ratatui): login and dashboard screens driven by an async event loop
// - Headless commands: the same data path printed to stdout

mod attendance;
mod categorize;
mod cli;
mod config;
mod dashboard;
mod drilldown;
mod gateway;
mod headless;
mod identity;
mod logging;
mod model;
mod obfuscation;
mod session;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use gateway::{DemoGateway, Gateway, HttpGateway};
use identity::{DemoIdentityProvider, HttpIdentityProvider, IdentityProvider};
use logging::{LogBuffer, LogSink};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches the network or the log subscriber
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        return cli::handle_config(show, reset, edit, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if cli.demo {
        config.demo_mode = true;
    }
    if let Some(token) = cli.token.filter(|t| !t.trim().is_empty()) {
        config.access_token = Some(token);
    }

    // TUI mode: capture logs to the buffer (writing to the terminal would
    // garble the display). Headless commands log to stderr.
    let log_buffer = LogBuffer::new();
    let sink = if cli.command.is_none() {
        LogSink::Tui
    } else {
        LogSink::Stderr
    };
    let _file_guard = logging::init(&config.logging, sink, &log_buffer);

    let (gateway, identity) = build_services(&config)?;
    tracing::debug!(backend = gateway.name(), "Services ready");

    match &cli.command {
        Some(Commands::Classes) => headless::run_classes(gateway.as_ref()).await,
        Some(Commands::Courses(args)) => {
            headless::run_courses(
                gateway.as_ref(),
                identity.as_ref(),
                args,
                config.access_token.as_deref(),
            )
            .await
        }
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            tracing::info!("Starting TUI");
            let services = tui::Services { gateway, identity };
            let result = tui::run_tui(config, log_buffer, services).await;
            if let Err(e) = &result {
                tracing::error!("TUI error: {:?}", e);
            }
            tracing::info!("Shutdown complete");
            result
        }
    }
}

/// Pick the backend: canned data in demo mode, the configured endpoints
/// otherwise
fn build_services(config: &Config) -> Result<(Arc<dyn Gateway>, Arc<dyn IdentityProvider>)> {
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE - using built-in records");
        return Ok((Arc::new(DemoGateway::new()), Arc::new(DemoIdentityProvider)));
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("classdash/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    Ok((
        Arc::new(HttpGateway::new(client.clone(), &config.api)),
        Arc::new(HttpIdentityProvider::new(
            client,
            config.api.userinfo_url.clone(),
        )),
    ))
}
