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

//! Transport controls: previous, play/pause, next and the volume panel.
//!
//! The view remembers where each button was last drawn so mouse clicks can
//! be hit-tested against the same layout the user sees.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

/// Volume change applied by a single key press, matching the slider step.
pub(crate) const VOLUME_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TransportAction {
    TogglePlay,
    Next,
    Previous,
    AdjustVolume(f64),
    SetVolume(f64),
}

#[derive(Debug, Default)]
pub(crate) struct TransportView {
    pub(crate) volume_visible: bool,
    previous_area: Rect,
    play_area: Rect,
    next_area: Rect,
    volume_button_area: Rect,
    slider_area: Rect,
}

impl TransportView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn toggle_volume(&mut self) {
        self.volume_visible = !self.volume_visible;
    }

    fn button_at(&self, column: u16, row: u16) -> Option<TransportButton> {
        let position = Position::new(column, row);
        [
            (self.previous_area, TransportButton::Previous),
            (self.play_area, TransportButton::Play),
            (self.next_area, TransportButton::Next),
            (self.volume_button_area, TransportButton::Volume),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(position))
        .map(|(_, button)| button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransportButton {
    Previous,
    Play,
    Next,
    Volume,
}
