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

//! Fixed-order playlist with wrap-around navigation.
//!
//! The playlist is populated once at start-up and never mutated afterwards.
//! Navigation always wraps: there is no "stop at the end" mode.

use std::collections::HashSet;

use crate::{error::PlaylistError, model::Track};

const COVER_CONCERT: &str =
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop";

#[derive(Debug, Clone)]
pub(crate) struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Builds a playlist, rejecting an empty list and duplicate track ids.
    pub(crate) fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }

        let mut seen = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if !seen.insert(track.id) {
                return Err(PlaylistError::DuplicateId(track.id));
            }
        }

        Ok(Self { tracks })
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn next_index(&self, current: usize) -> usize {
        (current + 1) % self.len()
    }

    pub(crate) fn previous_index(&self, current: usize) -> usize {
        (current + self.len() - 1) % self.len()
    }
}

/// The seed playlist shipped with the player.
///
/// Source paths are relative to the configured media root; cover URLs are
/// fetched by whatever renders them, never by the player itself.
pub(crate) fn default_tracks() -> Vec<Track> {
    vec![
        Track::new(1, "Jungle Waves", "DIMMYSAD", "/songs/junglewaves.mp3", Some(COVER_CONCERT)),
        Track::new(
            2,
            "Stylish Deep Electronic",
            "NverAvetyanMusic",
            "/songs/Stylish_Deep_Electronic.mp3",
            Some("https://images.unsplash.com/photo-1571330735066-03aaa9429d89?w=400&h=400&fit=crop"),
        ),
        Track::new(
            3,
            "Spinning Head",
            "Gvidon",
            "/songs/spinning-head.mp3",
            Some("https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?w=400&h=400&fit=crop"),
        ),
        Track::new(
            4,
            "Alone",
            "BoDleasons",
            "/songs/alone.mp3",
            Some("https://images.unsplash.com/photo-1518609878373-06d740f60d8b?w=400&h=400&fit=crop"),
        ),
        Track::new(
            5,
            "Don't Talk",
            "Cosmonkey",
            "/songs/dont-talk.mp3",
            Some("https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&h=400&fit=crop"),
        ),
        Track::new(6, "Gorilla", "Alex_MakeMusic", "/songs/gorilla.mp3", Some(COVER_CONCERT)),
        Track::new(
            7,
            "Future Design",
            "Penguin Music",
            "/songs/future-design.mp3",
            Some("https://images.unsplash.com/photo-1511379938547-c1f69419868d?w=400&h=400&fit=crop"),
        ),
    ]
}
