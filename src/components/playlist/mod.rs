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

//! Playlist view.
//!
//! Shows one row per track with the current track highlighted. A cursor moves
//! through the rows independently of playback; activating a row (Enter or a
//! click) selects that track for playback.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::TableState};

/// Header line plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlaylistAction {
    Select(usize),
}

pub(crate) struct PlaylistView {
    pub(crate) table_state: TableState,
    /// Where the track rows were last drawn, excluding the header.
    rows_area: Rect,
    len: usize,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new().with_selected(Some(0)),
            rows_area: Rect::default(),
            len: 0,
        }
    }

    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    fn goto_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if self.len > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if self.len > 0 {
            self.table_state.select(Some(self.len - 1));
        }
    }

    /// Playlist index of the row drawn at screen row `row`, if any.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.rows_area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }

        let index = self.table_state.offset() + usize::from(row - area.y);
        (index < self.len).then_some(index)
    }
}
