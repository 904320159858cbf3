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

use tracing::trace;

use crate::{
    App,
    components::{PlaylistAction, ProgressAction, TransportAction},
    events::InputAction,
    player::{MediaElement, MediaNotification, PlaybackController},
};

/// Applies an input action to the controller.
///
/// Returns `false` when the action asks the application to quit.
pub(super) fn apply_action<M: MediaElement>(
    controller: &mut PlaybackController<M>,
    action: InputAction,
) -> bool {
    trace!(?action, "Applying input action");

    match action {
        InputAction::Quit => return false,
        InputAction::Transport(TransportAction::TogglePlay) => controller.toggle_play(),
        InputAction::Transport(TransportAction::Next) => controller.next(),
        InputAction::Transport(TransportAction::Previous) => controller.previous(),
        InputAction::Transport(TransportAction::AdjustVolume(delta)) => {
            controller.adjust_volume(delta)
        }
        InputAction::Transport(TransportAction::SetVolume(volume)) => controller.set_volume(volume),
        InputAction::Progress(ProgressAction::Seek(fraction)) => controller.seek(fraction),
        InputAction::Playlist(PlaylistAction::Select(index)) => controller.select_track(index),
    }

    true
}

pub(super) fn handle_media_notification(app: &mut App, notification: MediaNotification) {
    app.controller.handle_notification(notification);
}

pub(super) fn handle_tick(app: &mut App) {
    app.tick = app.tick.wrapping_add(1);
}
