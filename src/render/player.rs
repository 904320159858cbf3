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

//! Renders the now playing card.
//!
//! The card shows the current track's cover indicator, title and artist, any
//! playback error, and a preview of the track that plays next.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    model::Track,
    player::PlayerStatus,
    render::icons::{ICON_COVER, ICON_ERROR, ICON_NOTE, SPINNER},
    theme::Theme,
};

/// Everything the card needs, borrowed from the controller.
pub(crate) struct NowPlaying<'a> {
    pub(crate) track: Option<&'a Track>,
    pub(crate) next: Option<&'a Track>,
    pub(crate) status: PlayerStatus,
    pub(crate) last_error: Option<&'a str>,
    pub(crate) tick: usize,
}

pub(crate) fn draw_now_playing(f: &mut Frame, area: Rect, now_playing: &NowPlaying, theme: &Theme) {
    let border_colour = match now_playing.status {
        PlayerStatus::Erroring => theme.error_colour,
        PlayerStatus::Playing | PlayerStatus::Paused => theme.accent_colour,
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_colour))
        .title(" Now Playing ");

    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(inner);

    f.render_widget(cover(now_playing, theme), columns[0]);
    f.render_widget(Paragraph::new(details(now_playing, theme)), columns[1]);
}

fn cover(now_playing: &NowPlaying, theme: &Theme) -> Paragraph<'static> {
    let has_cover = now_playing
        .track
        .is_some_and(|track| track.cover_url.is_some());
    let icon = if has_cover { ICON_COVER } else { ICON_NOTE };

    let spinner = if now_playing.status == PlayerStatus::Playing {
        SPINNER[now_playing.tick % SPINNER.len()]
    } else {
        " "
    };

    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            icon,
            Style::default()
                .fg(theme.highlight_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(spinner, Style::default().fg(theme.accent_colour))),
    ])
    .alignment(Alignment::Center)
}

fn details<'a>(now_playing: &NowPlaying<'a>, theme: &Theme) -> Vec<Line<'a>> {
    let Some(track) = now_playing.track else {
        return vec![Line::from("Nothing loaded").style(Style::default().fg(theme.muted_fg))];
    };

    let mut lines = vec![
        Line::from(Span::styled(
            track.title.as_str(),
            Style::default()
                .fg(theme.title_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            track.artist.as_str(),
            Style::default().fg(theme.artist_fg),
        )),
    ];

    match &track.cover_url {
        Some(url) => lines.push(Line::from(Span::styled(
            url.as_str(),
            Style::default()
                .fg(theme.muted_fg)
                .add_modifier(Modifier::UNDERLINED),
        ))),
        None => lines.push(Line::from("")),
    }

    match now_playing.last_error {
        Some(message) => lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", ICON_ERROR),
                Style::default().fg(theme.error_colour),
            ),
            Span::styled(message, Style::default().fg(theme.error_colour)),
        ])),
        None => lines.push(Line::from("")),
    }

    if let Some(next) = now_playing.next {
        lines.push(Line::from(vec![
            Span::styled("Next: ", Style::default().fg(theme.muted_fg)),
            Span::styled(next.title.as_str(), Style::default().fg(theme.artist_fg)),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::error::LOAD_FAILED_MESSAGE;

    fn render(now_playing: &NowPlaying) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 7)).unwrap();
        terminal
            .draw(|f| draw_now_playing(f, f.area(), now_playing, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_track_and_next_preview() {
        let current = Track::new(1, "Jungle Waves", "DIMMYSAD", "/songs/junglewaves.mp3", None);
        let next = Track::new(
            2,
            "Stylish Deep Electronic",
            "NverAvetyanMusic",
            "/songs/s.mp3",
            None,
        );

        let text = render(&NowPlaying {
            track: Some(&current),
            next: Some(&next),
            status: PlayerStatus::Paused,
            last_error: None,
            tick: 0,
        });

        assert!(text.contains("Jungle Waves"));
        assert!(text.contains("DIMMYSAD"));
        assert!(text.contains("Next: Stylish Deep Electronic"));
        assert!(text.contains(ICON_NOTE));
        assert!(!text.contains(LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn shows_error_banner_and_cover() {
        let cover = Some("https://img.example/c.jpg");
        let current = Track::new(3, "Spinning Head", "Gvidon", "/songs/x.mp3", cover);

        let text = render(&NowPlaying {
            track: Some(&current),
            next: None,
            status: PlayerStatus::Erroring,
            last_error: Some(LOAD_FAILED_MESSAGE),
            tick: 1,
        });

        assert!(text.contains(LOAD_FAILED_MESSAGE));
        assert!(text.contains("https://img.example/c.jpg"));
        assert!(text.contains(ICON_COVER));
        assert!(!text.contains("Next:"));
    }

    #[test]
    fn spinner_turns_only_while_playing() {
        let current = Track::new(1, "Jungle Waves", "DIMMYSAD", "/songs/junglewaves.mp3", None);
        let mut now_playing = NowPlaying {
            track: Some(&current),
            next: None,
            status: PlayerStatus::Playing,
            last_error: None,
            tick: 5,
        };

        assert!(render(&now_playing).contains(SPINNER[1]));

        now_playing.status = PlayerStatus::Paused;
        assert!(!render(&now_playing).contains(SPINNER[1]));
    }
}
