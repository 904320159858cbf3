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

//! Interactive views.
//!
//! Each view keeps the state it needs between frames (cursor positions and
//! the screen areas it last drew into) and turns raw terminal input into a
//! small action type. Actions are applied to the playback controller by the
//! event layer; views never touch playback state themselves.

pub(crate) mod playlist;
pub(crate) mod progress;
pub(crate) mod transport;

use ratatui::layout::{Position, Rect};

pub(crate) use playlist::{PlaylistAction, PlaylistView};
pub(crate) use progress::{ProgressAction, ProgressView};
pub(crate) use transport::{TransportAction, TransportView};

/// All views that receive input.
pub(crate) struct Views {
    pub(crate) transport: TransportView,
    pub(crate) progress: ProgressView,
    pub(crate) playlist: PlaylistView,
}

impl Views {
    pub(crate) fn new() -> Self {
        Self {
            transport: TransportView::new(),
            progress: ProgressView::new(),
            playlist: PlaylistView::new(),
        }
    }
}

/// Horizontal position of a click within `area`, as a fraction of its width.
///
/// Returns `None` when the click falls outside `area`.
pub(crate) fn click_fraction(area: Rect, column: u16, row: u16) -> Option<f64> {
    if area.width == 0 || !area.contains(Position::new(column, row)) {
        return None;
    }

    Some(f64::from(column - area.x) / f64::from(area.width))
}
