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

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use super::InputAction;
use super::handlers::apply_action;
use super::key_handlers::route_input;
use crate::{
    components::{PlaylistAction, ProgressAction, TransportAction, Views},
    model::playlist::{Playlist, default_tracks},
    player::{
        MediaNotification, PlaybackController,
        fake::{Call, FakeMediaElement},
        media::MediaEvent,
    },
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn controller() -> PlaybackController<FakeMediaElement> {
    let playlist = Playlist::new(default_tracks()).unwrap();
    PlaybackController::new(playlist, FakeMediaElement::default(), 0.7)
}

#[test]
fn quit_keys_win_over_views() {
    let mut views = Views::new();

    assert_eq!(route_input(&mut views, &key(KeyCode::Char('q'))), Some(InputAction::Quit));
    assert_eq!(route_input(&mut views, &key(KeyCode::Esc)), Some(InputAction::Quit));
}

#[test]
fn keys_reach_the_owning_view() {
    let mut views = Views::new();

    assert_eq!(
        route_input(&mut views, &key(KeyCode::Char(' '))),
        Some(InputAction::Transport(TransportAction::TogglePlay))
    );
    assert_eq!(
        route_input(&mut views, &key(KeyCode::Char('3'))),
        Some(InputAction::Progress(ProgressAction::Seek(0.3)))
    );
    assert_eq!(
        route_input(&mut views, &key(KeyCode::Enter)),
        Some(InputAction::Playlist(PlaylistAction::Select(0)))
    );
}

#[test]
fn key_releases_are_ignored() {
    let mut views = Views::new();
    let release = Event::Key(KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });

    assert_eq!(route_input(&mut views, &release), None);
}

#[test]
fn actions_drive_the_controller() {
    let mut c = controller();

    assert!(apply_action(&mut c, InputAction::Transport(TransportAction::TogglePlay)));
    assert!(c.state().is_playing);

    apply_action(&mut c, InputAction::Transport(TransportAction::Previous));
    assert_eq!(c.state().current_index, 6);

    apply_action(&mut c, InputAction::Transport(TransportAction::Next));
    assert_eq!(c.state().current_index, 0);

    apply_action(&mut c, InputAction::Playlist(PlaylistAction::Select(4)));
    assert_eq!(c.state().current_index, 4);

    apply_action(&mut c, InputAction::Transport(TransportAction::SetVolume(0.2)));
    apply_action(&mut c, InputAction::Transport(TransportAction::AdjustVolume(0.1)));
    assert!((c.state().volume - 0.3).abs() < 1e-9);
}

#[test]
fn seek_action_uses_the_track_duration() {
    let mut c = controller();
    let subscription = c.subscription().unwrap();
    c.handle_notification(MediaNotification::new(subscription, MediaEvent::LoadedMetadata(180.0)));

    apply_action(&mut c, InputAction::Progress(ProgressAction::Seek(0.5)));

    assert_eq!(c.media().calls.last(), Some(&Call::SetCurrentTime(90.0)));
}

#[test]
fn quit_action_reports_exit() {
    let mut c = controller();
    assert!(!apply_action(&mut c, InputAction::Quit));
}
