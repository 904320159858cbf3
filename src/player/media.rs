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

//! The media element contract.
//!
//! A media element is the black box that actually decodes and outputs audio.
//! The controller only ever talks to it through [`MediaElement`] and only ever
//! hears back from it through [`MediaNotification`]s delivered on the
//! application event channel.
//!
//! Every notification carries the [`Subscription`] it was emitted under. A
//! subscription is created for each source the controller attaches, so
//! anything emitted for a source that has since been replaced can be
//! recognised and dropped.

use crate::error::MediaResult;

/// Identifies one attach/detach cycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Subscription(pub(crate) u64);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MediaEvent {
    /// Playback position changed, in seconds.
    TimeUpdate(f64),
    /// Metadata for the loaded source is available; carries the duration.
    LoadedMetadata(f64),
    /// The loaded source is ready to start playing.
    CanPlay,
    /// The source played through to the end.
    Ended,
    /// Loading or decoding the source failed.
    Error(String),
    /// The element started playing, whoever asked it to.
    Playing,
    /// The element paused, whoever asked it to.
    Paused,
    /// A deferred play command succeeded.
    PlayResolved,
    /// A deferred play command failed.
    PlayRejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MediaNotification {
    pub(crate) subscription: Subscription,
    pub(crate) event: MediaEvent,
}

impl MediaNotification {
    pub(crate) fn new(subscription: Subscription, event: MediaEvent) -> Self {
        Self { subscription, event }
    }
}

/// Commands and properties of the platform media element.
///
/// Implementations must deliver events only for the subscription most
/// recently passed to [`MediaElement::subscribe`], and none at all after
/// [`MediaElement::unsubscribe`].
pub(crate) trait MediaElement {
    /// Assigns the next source. Takes effect on the following [`MediaElement::load`].
    fn set_source(&mut self, source: &str) -> MediaResult<()>;

    /// Resets the element and prepares the assigned source, paused.
    fn load(&mut self) -> MediaResult<()>;

    /// Starts playback.
    ///
    /// The outcome is reported later as [`MediaEvent::PlayResolved`] or
    /// [`MediaEvent::PlayRejected`] under the live subscription.
    fn play(&mut self) -> MediaResult<()>;

    fn pause(&mut self) -> MediaResult<()>;

    /// Sets the output volume in the range `0.0..=1.0`.
    fn set_volume(&mut self, volume: f64) -> MediaResult<()>;

    /// Moves the playback position to `seconds` from the start.
    fn set_current_time(&mut self, seconds: f64) -> MediaResult<()>;

    fn subscribe(&mut self, subscription: Subscription) -> MediaResult<()>;

    fn unsubscribe(&mut self) -> MediaResult<()>;
}
