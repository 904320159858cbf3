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

//! Rendering for the progress bar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Gauge, Paragraph},
};

use crate::{
    components::ProgressView, player::PlaybackState, theme::Theme, util::format::format_time,
};

impl ProgressView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, state: &PlaybackState, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let labels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Fill(1)])
            .split(rows[0]);

        let label_style = Style::default().fg(theme.muted_fg);
        let elapsed = Line::from(format_time(state.current_time)).style(label_style);
        let total = Line::from(format_time(state.duration.unwrap_or(0.0)))
            .style(label_style)
            .right_aligned();
        f.render_widget(Paragraph::new(elapsed), labels[0]);
        f.render_widget(Paragraph::new(total), labels[1]);

        self.gauge_area = rows[1];
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.gauge_colour)
                    .bg(theme.gauge_track_colour),
            )
            .ratio(state.progress())
            .label("")
            .use_unicode(true);
        f.render_widget(gauge, self.gauge_area);
    }
}
