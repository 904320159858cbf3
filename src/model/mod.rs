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

//! Domain models and core data structures.
//!
//! This module defines the [`Track`] record and the fixed-order
//! [`playlist::Playlist`] the player steps through.

pub(crate) mod playlist;

use serde::{Deserialize, Serialize};

/// One playable entry: metadata plus the source the media element loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Track {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) source_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) cover_url: Option<String>,
}

impl Track {
    pub(crate) fn new(
        id: u32,
        title: &str,
        artist: &str,
        source_path: &str,
        cover_url: Option<&str>,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            source_path: source_path.to_string(),
            cover_url: cover_url.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests;
