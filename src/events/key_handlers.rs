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

//! Routes raw terminal input to the view that owns it.

use crossterm::event::{Event, KeyCode, KeyEventKind};

use crate::{components::Views, events::InputAction};

/// Maps one terminal event to an action.
///
/// Global keys are checked first, then each view in turn. View key bindings
/// do not overlap, so at most one view reacts to a key. Mouse input is
/// hit-tested against the areas the views last drew into.
///
/// # Arguments
///
/// * `views` - The interactive views; their cursors and toggles may change.
/// * `event` - The input event captured from the terminal backend.
pub(crate) fn route_input(views: &mut Views, event: &Event) -> Option<InputAction> {
    if let Event::Key(key) = event {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            return Some(InputAction::Quit);
        }
    }

    if let Some(action) = views.transport.process_event(event) {
        return Some(InputAction::Transport(action));
    }
    if let Some(action) = views.progress.process_event(event) {
        return Some(InputAction::Progress(action));
    }
    views.playlist.process_event(event).map(InputAction::Playlist)
}
