//! Geofeed: a terminal chat timeline with geolocation-tagged text, voice,
//! and video posts.

mod app;
mod app_command;
mod config;
mod coords_prompt;
mod error;
mod location_provider;
mod recording_state;
#[cfg(test)]
mod tests;
mod tooltip;
mod ui;
mod widget;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    coords_prompt::CoordsPrompt,
    error::{AppError, Result as AppResult},
    location_provider::ConfigLocationProvider,
    recording_state::RecordingState,
    tooltip::{PopoverMessage, Tooltip, TooltipTarget, popover_rect},
    widget::ChatWidget,
};

use crate::config::Config;

use std::{io::Stdout, panic::Location, sync::Arc};

use error_location::ErrorLocation;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        },
    },
};
use tokio::sync::mpsc;
use tracing::error;

/// Application entry point.
fn main() {
    // The TUI owns stdout, so logs go to a file under the data directory.
    // The guard must outlive the app or buffered lines are lost.
    let _log_guard = match init_tracing() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:?}");
            std::process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let terminal = match setup_terminal() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to set up terminal: {:?}", e);
            std::process::exit(1);
        }
    };

    // A panic would otherwise leave the terminal in raw mode.
    set_panic_hook();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            let _ = restore_terminal();
            std::process::exit(1);
        }
    };

    // block_on (not spawn): the app future holds !Send playback handles and
    // stays on this thread.
    let result = runtime.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);
        let provider = Arc::new(ConfigLocationProvider::new(&config.location));

        let app = App::new(config, terminal, provider, command_tx, command_rx);
        app.run().await
    });

    if let Err(e) = restore_terminal() {
        error!("Failed to restore terminal: {:?}", e);
    }

    if let Err(e) = result {
        error!(error = ?e, "App error");
        std::process::exit(1);
    }
}

fn init_tracing() -> AppResult<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = config::log_dir()?;
    let appender = tracing_appender::rolling::never(&log_dir, "geofeed.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter("geofeed=debug")
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| AppError::TerminalError {
        reason: format!("Failed to enable raw mode: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::TerminalError {
        reason: format!("Failed to enter alternate screen: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| AppError::TerminalError {
        reason: format!("Failed to create terminal: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn restore_terminal() -> AppResult<()> {
    disable_raw_mode().map_err(|e| AppError::TerminalError {
        reason: format!("Failed to disable raw mode: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    execute!(std::io::stdout(), LeaveAlternateScreen).map_err(|e| AppError::TerminalError {
        reason: format!("Failed to leave alternate screen: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(())
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        hook(info);
    }));
}
