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

//! Audio playback control and state management.
//!
//! * [`media`] defines the contract between the controller and whatever
//!   actually plays audio.
//! * [`controller`] holds the playback state and all of the playback logic.
//! * [`MpvMediaElement`] is the production media element: a command proxy for
//!   a background worker thread that drives MPV, so that audio operations
//!   never block the main application thread.

pub(crate) mod controller;
pub(crate) mod media;
mod worker;

use std::sync::mpsc;

pub(crate) use controller::{PlaybackController, PlaybackState, PlayerStatus};
pub(crate) use media::{MediaElement, MediaNotification, Subscription};

use crate::{
    error::{MediaError, MediaResult},
    events::AppEvent,
    player::worker::MediaCommand,
};

/// A handle to the MPV media worker.
///
/// Every call only queues a command; results and state changes come back as
/// [`MediaNotification`]s on the application event channel.
pub(crate) struct MpvMediaElement {
    command_tx: mpsc::Sender<MediaCommand>,
}

impl MpvMediaElement {
    /// Spawns the media worker thread and returns a handle to it.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - The application event channel notifications are
    ///   delivered on.
    /// * `media_root` - Base directory or URL relative track sources are
    ///   resolved against.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>, media_root: &str) -> MediaResult<Self> {
        let (command_tx, command_rx) = mpsc::channel::<MediaCommand>();

        worker::spawn_media_worker(command_rx, event_tx, media_root.to_string())
            .map_err(|e| MediaError::Backend(format!("failed to spawn media worker: {e}")))?;

        Ok(Self { command_tx })
    }

    fn send(&self, command: MediaCommand) -> MediaResult<()> {
        self.command_tx.send(command)?;
        Ok(())
    }
}

impl MediaElement for MpvMediaElement {
    fn set_source(&mut self, source: &str) -> MediaResult<()> {
        self.send(MediaCommand::SetSource(source.to_string()))
    }

    fn load(&mut self) -> MediaResult<()> {
        self.send(MediaCommand::Load)
    }

    fn play(&mut self) -> MediaResult<()> {
        self.send(MediaCommand::Play)
    }

    fn pause(&mut self) -> MediaResult<()> {
        self.send(MediaCommand::Pause)
    }

    fn set_volume(&mut self, volume: f64) -> MediaResult<()> {
        self.send(MediaCommand::SetVolume(volume))
    }

    fn set_current_time(&mut self, seconds: f64) -> MediaResult<()> {
        self.send(MediaCommand::SetCurrentTime(seconds))
    }

    fn subscribe(&mut self, subscription: Subscription) -> MediaResult<()> {
        self.send(MediaCommand::Subscribe(subscription))
    }

    fn unsubscribe(&mut self) -> MediaResult<()> {
        self.send(MediaCommand::Unsubscribe)
    }
}

impl Drop for MpvMediaElement {
    fn drop(&mut self) {
        let _ = self.command_tx.send(MediaCommand::Quit);
    }
}

#[cfg(test)]
pub(crate) mod fake;
