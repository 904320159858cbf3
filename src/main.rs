// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Player TUI.
//!
//! A terminal audio player that steps through a fixed playlist.
//!
//! The application coordinates a `ratatui` frontend with a background media
//! worker that drives MPV.
//!
//! * The **Main Thread** owns all state: it runs the event loop, applies
//!   input to the playback controller and redraws the UI.
//! * The **Media Worker** owns the MPV handle and reports playback progress
//!   and lifecycle events back over the application event channel.
//! * **Input and Tick Threads** forward terminal input and a periodic tick.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal state is restored even when the run fails. Communication between
//! threads uses `std::sync::mpsc` channels.

mod components;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    components::Views,
    config::AppConfig,
    events::{AppEvent, process_events},
    player::{MpvMediaElement, PlaybackController},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub controller: PlaybackController<MpvMediaElement>,

    pub views: Views,

    /// Counts ticks, drives the playing spinner.
    pub tick: usize,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// Starts the media worker and loads the first track, paused.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let playlist = config.playlist().context("Invalid playlist configuration")?;
        let media = MpvMediaElement::new(event_tx.clone(), &config.media_root)
            .context("Failed to start media worker")?;
        let controller = PlaybackController::new(playlist, media, config.volume);

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            controller,
            views: Views::new(),
            tick: 0,
        })
    }
}

/// The entry point of the application.
///
/// Loads configuration, starts logging, initialises the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let (config, config_error) = config::load_config();

    let log_path = logging::init_logging(&config.log_level).context("Failed to start logging")?;
    info!(log = %log_path.display(), "Starting");
    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let mut app = App::new(config).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    app.controller.shutdown();
    info!("Stopped");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background colour from the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches to the alternate screen buffer and enables mouse capture.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// Reverses [`setup_terminal`]. Best-effort: failures are ignored, as this
/// runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event loop ends on a fatal error or a terminal
/// failure.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw terminal input to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx_input.send(AppEvent::Key(key))
                }
                Ok(event::Event::Mouse(mouse)) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    tx_input.send(AppEvent::Mouse(mouse))
                }
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!(error = %e, "Failed to read terminal input");
                    Ok(())
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Periodic tick, the minimum "frame rate" of the UI.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    info!(
        tracks = app.controller.playlist().len(),
        media_root = %app.config.media_root,
        "Player ready"
    );

    process_events(terminal, app)
}
