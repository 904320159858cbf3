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

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use super::{ProgressAction, ProgressView};
use crate::{player::PlaybackState, theme::Theme};

fn state(current_time: f64, duration: Option<f64>) -> PlaybackState {
    PlaybackState {
        current_index: 0,
        is_playing: true,
        volume: 0.7,
        current_time,
        duration,
        last_error: None,
    }
}

fn render(view: &mut ProgressView, state: &PlaybackState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(40, 2)).unwrap();
    terminal
        .draw(|f| view.draw(f, f.area(), state, &Theme::default()))
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

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn labels_show_elapsed_and_total() {
    let mut view = ProgressView::new();
    let text = render(&mut view, &state(65.0, Some(200.0)));

    let first_line = text.lines().next().unwrap();
    assert!(first_line.starts_with("1:05"));
    assert!(first_line.trim_end().ends_with("3:20"));
}

#[test]
fn unknown_duration_shows_zero_total() {
    let mut view = ProgressView::new();
    let text = render(&mut view, &state(5.0, None));

    assert!(text.lines().next().unwrap().trim_end().ends_with("0:00"));
}

#[test]
fn clicking_the_gauge_seeks_to_the_clicked_fraction() {
    let mut view = ProgressView::new();
    render(&mut view, &state(0.0, Some(200.0)));

    assert_eq!(view.process_event(&left_click(20, 1)), Some(ProgressAction::Seek(0.5)));
    assert_eq!(view.process_event(&left_click(0, 1)), Some(ProgressAction::Seek(0.0)));
    // The label row is not part of the gauge.
    assert_eq!(view.process_event(&left_click(20, 0)), None);
}

#[test]
fn digits_seek_in_tenths() {
    let mut view = ProgressView::new();

    let seek = |view: &mut ProgressView, c: char| {
        view.process_event(&Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    };
    assert_eq!(seek(&mut view, '0'), Some(ProgressAction::Seek(0.0)));
    assert_eq!(seek(&mut view, '5'), Some(ProgressAction::Seek(0.5)));
    assert_eq!(seek(&mut view, '9'), Some(ProgressAction::Seek(0.9)));
    assert_eq!(seek(&mut view, 'x'), None);
}
