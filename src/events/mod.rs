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

//! Application events and the main event loop.
//!
//! Every thread in the application (terminal input, the tick timer and the
//! media worker) posts [`AppEvent`]s to one channel. [`process_events`] is
//! the only consumer and the only code that mutates application state; it
//! redraws the UI after every event.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{error, info};

use crate::{
    App,
    components::{PlaylistAction, ProgressAction, TransportAction},
    player::MediaNotification,
    render::draw,
};

use handlers::{apply_action, handle_media_notification, handle_tick};
use key_handlers::route_input;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Media(MediaNotification),

    Tick,

    ExitApplication,

    FatalError(String),
}

/// What a piece of user input asks for, once routed to a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum InputAction {
    Quit,
    Transport(TransportAction),
    Progress(ProgressAction),
    Playlist(PlaylistAction),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// Loops until an exit event is received or the event channel is closed. A
/// fatal error ends the loop with that error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => {
                info!("Exit requested");
                break;
            }
            AppEvent::FatalError(message) => {
                error!(%message, "Fatal error");
                bail!(message);
            }
            AppEvent::Key(key) => process_input(app, Event::Key(key))?,
            AppEvent::Mouse(mouse) => process_input(app, Event::Mouse(mouse))?,
            AppEvent::Media(notification) => handle_media_notification(app, notification),
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_input(app: &mut App, event: Event) -> Result<()> {
    let Some(action) = route_input(&mut app.views, &event) else {
        return Ok(());
    };

    if !apply_action(&mut app.controller, action) {
        app.event_tx.send(AppEvent::ExitApplication)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests;
