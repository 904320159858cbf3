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

//! Input handling for the transport controls.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::components::transport::{TransportAction, TransportButton, TransportView, VOLUME_STEP};

impl TransportView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TransportAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char(' ') | KeyCode::Char('p') => Some(TransportAction::TogglePlay),
                KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => {
                    Some(TransportAction::Next)
                }
                KeyCode::Char('h') | KeyCode::Char('b') | KeyCode::Left => {
                    Some(TransportAction::Previous)
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    Some(TransportAction::AdjustVolume(VOLUME_STEP))
                }
                KeyCode::Char('-') | KeyCode::Char('_') => {
                    Some(TransportAction::AdjustVolume(-VOLUME_STEP))
                }
                KeyCode::Char('v') => {
                    self.toggle_volume();
                    None
                }
                _ => None,
            },

            Event::Mouse(mouse_event) => {
                if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
                    return None;
                }

                let (column, row) = (mouse_event.column, mouse_event.row);
                if self.volume_visible {
                    if let Some(volume) = slider_volume(self.slider_area, column, row) {
                        return Some(TransportAction::SetVolume(volume));
                    }
                }

                match self.button_at(column, row)? {
                    TransportButton::Previous => Some(TransportAction::Previous),
                    TransportButton::Play => Some(TransportAction::TogglePlay),
                    TransportButton::Next => Some(TransportAction::Next),
                    TransportButton::Volume => {
                        self.toggle_volume();
                        None
                    }
                }
            }

            _ => None,
        }
    }
}

/// Volume under a click on the slider, rounded to the nearest step.
///
/// The leftmost cell is silence and the rightmost full volume.
fn slider_volume(area: Rect, column: u16, row: u16) -> Option<f64> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    if area.width <= 1 {
        return Some(1.0);
    }

    let steps = (1.0 / VOLUME_STEP).round();
    let fraction = f64::from(column - area.x) / f64::from(area.width - 1);
    Some((fraction * steps).round() / steps)
}
