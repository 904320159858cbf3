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

//! Playback-state controller.
//!
//! [`PlaybackController`] owns the playlist, the [`PlaybackState`] the views
//! render from, and the media element. Every state mutation goes through it,
//! either in response to user intent (toggle, skip, select, seek, volume) or
//! in response to a [`MediaNotification`] from the element.
//!
//! # Track changes
//!
//! Changing the current index always runs the same sequence:
//!
//! 1. detach the current subscription,
//! 2. assign the new source,
//! 3. attach a fresh subscription,
//! 4. load the source,
//! 5. play only once the element reports [`MediaEvent::CanPlay`], and only if
//!    playback should resume.
//!
//! Notifications tagged with any subscription other than the live one are
//! dropped, so late events from a replaced source cannot leak into the state.

use std::fmt::Display;

use tracing::{debug, info, trace, warn};

use crate::{
    error::{LOAD_FAILED_MESSAGE, PLAY_FAILED_MESSAGE},
    model::{Track, playlist::Playlist},
    player::media::{MediaElement, MediaEvent, MediaNotification, Subscription},
};

/// Volume used when the configuration does not say otherwise.
pub(crate) const DEFAULT_VOLUME: f64 = 0.7;

/// Everything the views need to know about playback.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaybackState {
    pub(crate) current_index: usize,
    pub(crate) is_playing: bool,
    pub(crate) volume: f64,
    pub(crate) current_time: f64,
    /// `None` until the element reports a usable duration.
    pub(crate) duration: Option<f64>,
    pub(crate) last_error: Option<String>,
}

impl PlaybackState {
    fn new(volume: f64) -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            volume,
            current_time: 0.0,
            duration: None,
            last_error: None,
        }
    }

    /// Fraction of the current track already played, in `0.0..=1.0`.
    pub(crate) fn progress(&self) -> f64 {
        match self.duration {
            Some(duration) if duration > 0.0 => (self.current_time / duration).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

/// Coarse controller state, derived from [`PlaybackState`].
///
/// An error does not force playback to stop: a track that failed to play
/// still has `is_playing` set, and reports `Erroring` until the next track
/// change clears the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerStatus {
    Paused,
    Playing,
    Erroring,
}

pub(crate) struct PlaybackController<M: MediaElement> {
    playlist: Playlist,
    media: M,
    state: PlaybackState,
    subscription: Option<Subscription>,
    subscriptions_issued: u64,
    resume_when_ready: bool,
}

impl<M: MediaElement> PlaybackController<M> {
    /// Creates the controller and loads the first track, paused.
    pub(crate) fn new(playlist: Playlist, media: M, volume: f64) -> Self {
        let mut controller = Self {
            playlist,
            media,
            state: PlaybackState::new(clamp_volume(volume)),
            subscription: None,
            subscriptions_issued: 0,
            resume_when_ready: false,
        };

        controller.apply_volume();
        controller.change_track(0, false);
        controller
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub(crate) fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.state.current_index)
    }

    /// The track auto-advance would move to.
    pub(crate) fn next_track(&self) -> Option<&Track> {
        self.playlist
            .get(self.playlist.next_index(self.state.current_index))
    }

    pub(crate) fn status(&self) -> PlayerStatus {
        if self.state.last_error.is_some() {
            PlayerStatus::Erroring
        } else if self.state.is_playing {
            PlayerStatus::Playing
        } else {
            PlayerStatus::Paused
        }
    }

    /// Pauses when playing, otherwise asks the element to play.
    ///
    /// `is_playing` flips immediately; a play command that is rejected later
    /// only records an error.
    pub(crate) fn toggle_play(&mut self) {
        if self.state.is_playing {
            self.resume_when_ready = false;
            if let Err(e) = self.media.pause() {
                warn!(error = %e, "Pause command failed");
            }
            self.state.is_playing = false;
        } else {
            self.request_play();
            self.state.is_playing = true;
        }
        debug!(is_playing = self.state.is_playing, "Toggled playback");
    }

    pub(crate) fn next(&mut self) {
        let index = self.playlist.next_index(self.state.current_index);
        self.advance_to(index, self.state.is_playing);
    }

    pub(crate) fn previous(&mut self) {
        let index = self.playlist.previous_index(self.state.current_index);
        self.advance_to(index, self.state.is_playing);
    }

    /// Jumps straight to `index`, resuming only if already playing.
    pub(crate) fn select_track(&mut self, index: usize) {
        if index >= self.playlist.len() {
            warn!(index, len = self.playlist.len(), "Ignoring selection outside the playlist");
            return;
        }

        if index == self.state.current_index {
            self.state.last_error = None;
            return;
        }

        self.advance_to(index, self.state.is_playing);
    }

    pub(crate) fn set_volume(&mut self, volume: f64) {
        self.state.volume = clamp_volume(volume);
        self.apply_volume();
    }

    pub(crate) fn adjust_volume(&mut self, delta: f64) {
        self.set_volume(self.state.volume + delta);
    }

    /// Seeks to `fraction` of the track. Ignored while the duration is unknown.
    pub(crate) fn seek(&mut self, fraction: f64) {
        let Some(duration) = self.state.duration.filter(|d| d.is_finite() && *d > 0.0) else {
            debug!(fraction, "Seek ignored, duration unknown");
            return;
        };

        if fraction.is_nan() {
            return;
        }

        let seconds = fraction.clamp(0.0, 1.0) * duration;
        match self.media.set_current_time(seconds) {
            Ok(()) => self.state.current_time = seconds,
            Err(e) => warn!(error = %e, seconds, "Seek failed"),
        }
    }

    /// Applies a notification from the media element.
    pub(crate) fn handle_notification(&mut self, notification: MediaNotification) {
        if self.subscription != Some(notification.subscription) {
            trace!(
                stale = notification.subscription.0,
                event = ?notification.event,
                "Dropping notification from a detached subscription"
            );
            return;
        }

        match notification.event {
            MediaEvent::TimeUpdate(seconds) => {
                if seconds.is_finite() && seconds >= 0.0 {
                    self.state.current_time = seconds;
                }
            }
            MediaEvent::LoadedMetadata(duration) => {
                self.state.duration = (duration.is_finite() && duration > 0.0).then_some(duration);
            }
            MediaEvent::CanPlay => {
                if self.resume_when_ready {
                    self.resume_when_ready = false;
                    self.request_play();
                }
            }
            MediaEvent::Ended => {
                info!(index = self.state.current_index, "Track ended, advancing");
                let index = self.playlist.next_index(self.state.current_index);
                self.advance_to(index, true);
            }
            MediaEvent::Error(reason) => {
                self.resume_when_ready = false;
                self.record_failure(LOAD_FAILED_MESSAGE, reason);
            }
            MediaEvent::Playing => self.state.is_playing = true,
            MediaEvent::Paused => {
                // Loading a new source pauses the element; that pause is not
                // the user's and must not cancel a pending resume.
                if !self.resume_when_ready {
                    self.state.is_playing = false;
                }
            }
            MediaEvent::PlayResolved => debug!("Play command resolved"),
            MediaEvent::PlayRejected(reason) => self.record_failure(PLAY_FAILED_MESSAGE, reason),
        }
    }

    /// Subscribes to the element under a fresh subscription.
    ///
    /// Any live subscription is released first, so there is never more than
    /// one.
    pub(crate) fn attach(&mut self) {
        self.detach();

        self.subscriptions_issued += 1;
        let subscription = Subscription(self.subscriptions_issued);
        match self.media.subscribe(subscription) {
            Ok(()) => {
                trace!(subscription = subscription.0, "Attached");
                self.subscription = Some(subscription);
            }
            Err(e) => self.record_failure(LOAD_FAILED_MESSAGE, e),
        }
    }

    pub(crate) fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            trace!(subscription = subscription.0, "Detached");
            if let Err(e) = self.media.unsubscribe() {
                warn!(error = %e, "Unsubscribe failed");
            }
        }
    }

    /// Stops playback and releases the subscription.
    pub(crate) fn shutdown(&mut self) {
        if self.state.is_playing {
            if let Err(e) = self.media.pause() {
                warn!(error = %e, "Pause on shutdown failed");
            }
        }
        self.resume_when_ready = false;
        self.detach();
    }

    fn advance_to(&mut self, index: usize, resume: bool) {
        self.state.last_error = None;
        self.change_track(index, resume);
    }

    fn change_track(&mut self, index: usize, resume: bool) {
        self.detach();

        self.state.current_index = index;
        self.state.current_time = 0.0;
        self.state.duration = None;
        self.resume_when_ready = false;

        let Some(source) = self.playlist.get(index).map(|t| t.source_path.clone()) else {
            return;
        };
        debug!(index, %source, resume, "Changing track");

        if let Err(e) = self.media.set_source(&source) {
            self.record_failure(LOAD_FAILED_MESSAGE, e);
            return;
        }

        self.attach();

        match self.media.load() {
            Ok(()) => self.resume_when_ready = resume,
            Err(e) => self.record_failure(LOAD_FAILED_MESSAGE, e),
        }
    }

    fn request_play(&mut self) {
        match self.media.play() {
            Ok(()) => trace!(subscription = ?self.subscription, "Play requested"),
            Err(e) => self.record_failure(PLAY_FAILED_MESSAGE, e),
        }
    }

    fn apply_volume(&mut self) {
        if let Err(e) = self.media.set_volume(self.state.volume) {
            warn!(error = %e, volume = self.state.volume, "Volume change failed");
        }
    }

    fn record_failure(&mut self, message: &str, cause: impl Display) {
        warn!(index = self.state.current_index, cause = %cause, "{message}");
        self.state.last_error = Some(message.to_string());
    }

    #[cfg(test)]
    pub(crate) fn subscription(&self) -> Option<Subscription> {
        self.subscription
    }

    #[cfg(test)]
    pub(crate) fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub(crate) fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }
}

fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}
