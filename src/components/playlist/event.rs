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

//! Input handling for the playlist view.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::components::playlist::{PlaylistAction, PlaylistView};

impl PlaylistView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PlaylistAction> {
        match event {
            Event::Key(key_event) => {
                match key_event.code {
                    KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
                    KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
                    KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
                    KeyCode::Char('G') | KeyCode::End => self.goto_last(),
                    KeyCode::Enter => return self.cursor().map(PlaylistAction::Select),
                    _ => {}
                }
                None
            }

            Event::Mouse(mouse_event)
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                let index = self.row_at(mouse_event.column, mouse_event.row)?;
                self.table_state.select(Some(index));
                Some(PlaylistAction::Select(index))
            }

            _ => None,
        }
    }
}
