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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into `ratatui` widgets. The
//! primary entry point is [`draw`], called after every application event.

pub(crate) mod icons;
pub(crate) mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::player::{NowPlaying, draw_now_playing},
};

const KEY_HELP: [(&str, &str); 7] = [
    ("space", "play/pause"),
    ("h/l", "prev/next"),
    ("j/k", "move"),
    ("enter", "select"),
    ("+/-", "volume"),
    ("0-9", "seek"),
    ("q", "quit"),
];

/// Renders the user interface to the terminal frame.
///
/// Layout, top to bottom: the now playing card, progress, transport
/// controls, the playlist and a key help line. Views record the areas they
/// draw into so mouse input can be hit-tested on the next event.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let controller = &app.controller;
    let state = controller.state();

    let now_playing = NowPlaying {
        track: controller.current_track(),
        next: controller.next_track(),
        status: controller.status(),
        last_error: state.last_error.as_deref(),
        tick: app.tick,
    };
    draw_now_playing(f, outer[0], &now_playing, &app.theme);

    app.views.progress.draw(f, outer[1], state, &app.theme);
    app.views.transport.draw(f, outer[2], state, &app.theme);
    app.views
        .playlist
        .draw(f, outer[3], controller.playlist(), state, &app.theme);

    draw_key_help(f, outer[4], app);
}

fn draw_key_help(f: &mut Frame, area: Rect, app: &App) {
    let spans: Vec<Span> = KEY_HELP
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key} "), Style::default().fg(app.theme.accent_colour)),
                Span::styled(format!("{action} "), Style::default().fg(app.theme.muted_fg)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
