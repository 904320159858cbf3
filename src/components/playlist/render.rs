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

//! Rendering for the playlist view.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Row, Table},
};

use crate::{
    components::playlist::{HEADER_HEIGHT, PlaylistView},
    model::playlist::Playlist,
    player::PlaybackState,
    render::icons::{ICON_NOTE, ICON_PLAY},
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        playlist: &Playlist,
        state: &PlaybackState,
        theme: &Theme,
    ) {
        self.len = playlist.len();

        let rows = playlist.tracks().iter().enumerate().map(|(index, track)| {
            let is_current = index == state.current_index;

            let indicator = if is_current && state.is_playing {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.highlight_colour))
            } else {
                Line::from(ICON_NOTE).style(Style::default().fg(theme.muted_fg))
            };

            let mut title_style = Style::default().fg(theme.title_fg);
            if is_current {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let number = Line::from(format!("{:>2}", index + 1));
            let artist = Line::from(track.artist.as_str());
            let row = Row::new(vec![
                Cell::from(indicator),
                Cell::from(number.style(Style::default().fg(theme.muted_fg))),
                Cell::from(Line::from(track.title.as_str()).style(title_style)),
                Cell::from(artist.style(Style::default().fg(theme.artist_fg))),
            ]);

            if is_current {
                row.style(Style::default().bg(theme.current_row_bg))
            } else {
                row
            }
        });

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour))
            .title(format!(" Playlist | {} tracks ", playlist.len()))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        self.rows_area = Rect {
            y: inner.y.saturating_add(HEADER_HEIGHT),
            height: inner.height.saturating_sub(HEADER_HEIGHT),
            ..inner
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Percentage(55),
                Constraint::Percentage(45),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("#").right_aligned()),
                Cell::from("Title"),
                Cell::from("Artist"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(HEADER_HEIGHT - 1),
        )
        .row_highlight_style(Style::default().bg(theme.cursor_row_bg))
        .block(block);

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
