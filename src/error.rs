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

//! Error types for the playlist and the media backend.
//!
//! Application plumbing uses [`anyhow`]; the typed errors here exist where a
//! caller needs to tell failure kinds apart, or where a failure has to be
//! turned into a user-facing message rather than aborting the application.

use thiserror::Error;

/// Message shown when the media element reports a load or decode failure.
pub(crate) const LOAD_FAILED_MESSAGE: &str = "Failed to load audio file";

/// Message shown when a play command is rejected.
pub(crate) const PLAY_FAILED_MESSAGE: &str = "Failed to play audio";

/// Errors raised while building a [`crate::model::playlist::Playlist`].
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PlaylistError {
    #[error("playlist must contain at least one track")]
    Empty,

    #[error("duplicate track id {0} in playlist")]
    DuplicateId(u32),
}

/// Errors raised by a [`crate::player::MediaElement`] implementation.
#[derive(Debug, Error)]
pub(crate) enum MediaError {
    /// The backend worker has gone away; no further commands can be served.
    #[error("media worker is no longer running")]
    Disconnected,

    /// The backend refused or failed a command.
    #[error("media backend error: {0}")]
    Backend(String),
}

impl<T> From<std::sync::mpsc::SendError<T>> for MediaError {
    fn from(_: std::sync::mpsc::SendError<T>) -> Self {
        MediaError::Disconnected
    }
}

pub(crate) type MediaResult<T> = std::result::Result<T, MediaError>;
