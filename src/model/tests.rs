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

use crate::error::PlaylistError;

use super::Track;
use super::playlist::{Playlist, default_tracks};

fn seed() -> Playlist {
    Playlist::new(default_tracks()).expect("seed playlist is valid")
}

#[test]
fn seed_playlist_has_seven_tracks_in_order() {
    let playlist = seed();
    assert_eq!(playlist.len(), 7);
    assert_eq!(playlist.get(0).map(|t| t.title.as_str()), Some("Jungle Waves"));
    assert_eq!(playlist.get(6).map(|t| t.artist.as_str()), Some("Penguin Music"));
    assert!(playlist.get(7).is_none());
}

#[test]
fn next_then_previous_is_identity_for_every_index() {
    let playlist = seed();
    for i in 0..playlist.len() {
        assert_eq!(playlist.previous_index(playlist.next_index(i)), i);
        assert_eq!(playlist.next_index(playlist.previous_index(i)), i);
    }
}

#[test]
fn navigation_wraps_at_both_ends() {
    let playlist = seed();
    assert_eq!(playlist.next_index(6), 0);
    assert_eq!(playlist.previous_index(0), 6);
}

#[test]
fn single_track_playlist_wraps_onto_itself() {
    let playlist = Playlist::new(vec![Track::new(9, "Solo", "One", "/solo.mp3", None)]).unwrap();
    assert_eq!(playlist.next_index(0), 0);
    assert_eq!(playlist.previous_index(0), 0);
}

#[test]
fn empty_playlist_is_rejected() {
    assert_eq!(Playlist::new(vec![]).unwrap_err(), PlaylistError::Empty);
}

#[test]
fn duplicate_ids_are_rejected() {
    let tracks = vec![
        Track::new(1, "A", "x", "/a.mp3", None),
        Track::new(2, "B", "y", "/b.mp3", None),
        Track::new(1, "C", "z", "/c.mp3", None),
    ];
    assert_eq!(Playlist::new(tracks).unwrap_err(), PlaylistError::DuplicateId(1));
}
