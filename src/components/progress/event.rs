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

//! Input handling for the progress bar.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::components::{
    click_fraction,
    progress::{ProgressAction, ProgressView},
};

impl ProgressView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ProgressAction> {
        match event {
            // 0-9 jump to 0%-90%.
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char(c) => c
                    .to_digit(10)
                    .map(|digit| ProgressAction::Seek(f64::from(digit) / 10.0)),
                _ => None,
            },

            Event::Mouse(mouse_event)
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                click_fraction(self.gauge_area, mouse_event.column, mouse_event.row)
                    .map(ProgressAction::Seek)
            }

            _ => None,
        }
    }
}
