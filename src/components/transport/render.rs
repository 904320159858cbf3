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

//! Rendering for the transport controls.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Gauge, Paragraph},
};

use crate::{
    components::TransportView,
    player::PlaybackState,
    render::icons::{ICON_MUTED, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_VOLUME},
    theme::Theme,
    util::format::format_volume,
};

impl TransportView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &PlaybackState, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Fill(1),
                Constraint::Length(10),
                Constraint::Length(22),
            ])
            .split(area);

        self.previous_area = chunks[1];
        self.play_area = chunks[3];
        self.next_area = chunks[5];
        self.volume_button_area = chunks[7];

        let button_style = Style::default().fg(theme.artist_fg);
        draw_button(f, self.previous_area, ICON_PREV, button_style, theme);

        let play_icon = if state.is_playing { ICON_PAUSE } else { ICON_PLAY };
        let play_style = Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD);
        draw_button(f, self.play_area, play_icon, play_style, theme);

        draw_button(f, self.next_area, ICON_NEXT, button_style, theme);

        let volume_icon = if state.volume > 0.0 { ICON_VOLUME } else { ICON_MUTED };
        let volume_label = format!("{} {}", volume_icon, format_volume(state.volume));
        let volume_style = if self.volume_visible {
            Style::default().fg(theme.highlight_colour)
        } else {
            button_style
        };
        draw_button(f, self.volume_button_area, &volume_label, volume_style, theme);

        if self.volume_visible {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" Volume ");
            self.slider_area = block.inner(chunks[8]);
            f.render_widget(block, chunks[8]);

            let slider = Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(theme.gauge_colour)
                        .bg(theme.gauge_track_colour),
                )
                .ratio(state.volume.clamp(0.0, 1.0))
                .label("")
                .use_unicode(true);
            f.render_widget(slider, self.slider_area);
        } else {
            self.slider_area = Rect::default();
        }
    }
}

fn draw_button(f: &mut Frame, area: Rect, label: &str, style: Style, theme: &Theme) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_colour));
    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(button, area);
}
