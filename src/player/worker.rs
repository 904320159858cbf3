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

//! MPV-backed media worker and event translation.
//!
//! The worker thread owns the `libmpv` handle. It drains
//! [`MediaCommand`]s sent by [`super::MpvMediaElement`], then waits briefly
//! for MPV events and translates the interesting ones into
//! [`MediaNotification`]s on the application event channel.
//!
//! # Event mapping
//!
//! | MPV                         | media event                |
//! |-----------------------------|----------------------------|
//! | `time-pos` change           | [`MediaEvent::TimeUpdate`] |
//! | `duration` change           | [`MediaEvent::LoadedMetadata`] |
//! | `file-loaded`               | [`MediaEvent::CanPlay`]    |
//! | `end-file` (EOF)            | [`MediaEvent::Ended`]      |
//! | `end-file` (error)          | [`MediaEvent::Error`]      |
//! | `pause` change              | [`MediaEvent::Playing`] / [`MediaEvent::Paused`] |
//!
//! Nothing is forwarded while no subscription is active. MPV may still have
//! events for the previous file queued when a new one is loaded, so after a
//! subscribe or a load everything is dropped until MPV reports `start-file`
//! for the new file.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    io,
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};
use tracing::{debug, error, trace, warn};

use crate::{
    events::AppEvent,
    player::media::{MediaEvent, MediaNotification, Subscription},
};

/// How long a single MPV event wait may block, in seconds.
const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug)]
pub(crate) enum MediaCommand {
    SetSource(String),
    Load,
    Play,
    Pause,
    SetVolume(f64),
    SetCurrentTime(f64),
    Subscribe(Subscription),
    Unsubscribe,
    Quit,
}

/// State private to the worker thread.
pub(crate) struct WorkerState {
    media_root: String,
    source: Option<String>,
    subscription: Option<Subscription>,
    loaded: bool,
    awaiting_start: bool,
}

impl WorkerState {
    pub(crate) fn new(media_root: String) -> Self {
        Self {
            media_root,
            source: None,
            subscription: None,
            loaded: false,
            awaiting_start: false,
        }
    }

    pub(crate) fn subscribe(&mut self, subscription: Subscription) {
        self.subscription = Some(subscription);
        self.awaiting_start = true;
    }

    /// Records that MPV accepted a `loadfile` for the assigned source.
    pub(crate) fn file_requested(&mut self) {
        self.loaded = true;
        self.awaiting_start = true;
    }

    fn notify(&self, event_tx: &Sender<AppEvent>, event: MediaEvent) -> Result<()> {
        if let Some(subscription) = self.subscription {
            event_tx
                .send(AppEvent::Media(MediaNotification::new(subscription, event)))
                .context("Failed to send media event")?;
        }
        Ok(())
    }
}

/// Spawns the media worker thread.
///
/// If the worker fails, the failure is broadcast as a fatal application
/// event.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the media command channel.
/// * `event_tx` - The channel used to deliver media notifications.
/// * `media_root` - Base that relative track sources are resolved against.
pub(crate) fn spawn_media_worker(
    command_rx: Receiver<MediaCommand>,
    event_tx: Sender<AppEvent>,
    media_root: String,
) -> io::Result<()> {
    let error_tx = event_tx.clone();

    thread::Builder::new()
        .name("media-worker".to_string())
        .spawn(move || {
            if let Err(e) = media_worker(command_rx, event_tx, media_root) {
                error!(error = ?e, "Media worker failed");
                let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
            }
        })?;

    Ok(())
}

fn media_worker(
    command_rx: Receiver<MediaCommand>,
    event_tx: Sender<AppEvent>,
    media_root: String,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("duration", 0)
        .context("Failed to observe duration")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    let mut state = WorkerState::new(media_root);

    debug!("Media worker started");

    while process_commands(&mut handler, &command_rx, &mut state, &event_tx)? {
        process_mpv_events(&mut handler, &mut state, &event_tx)?;
    }

    debug!("Media worker stopped");
    Ok(())
}

/// Drains and executes all pending commands.
///
/// Returns `false` once the worker should stop.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<MediaCommand>,
    state: &mut WorkerState,
    event_tx: &Sender<AppEvent>,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            MediaCommand::SetSource(source) => {
                state.source = Some(resolve_source(&state.media_root, &source));
            }
            MediaCommand::Load => {
                state.loaded = false;
                let Some(source) = state.source.clone() else {
                    state.notify(event_tx, MediaEvent::Error("no source assigned".to_string()))?;
                    continue;
                };

                let loaded = handler
                    .set_property("pause", true)
                    .and_then(|_| handler.command(&["loadfile", &source, "replace"]));
                match loaded {
                    Ok(()) => state.file_requested(),
                    Err(e) => {
                        warn!(%source, error = ?e, "MPV refused to load source");
                        state.notify(event_tx, MediaEvent::Error(format!("{:?}", e)))?;
                    }
                }
            }
            MediaCommand::Play => {
                let outcome = if !state.loaded {
                    MediaEvent::PlayRejected("no media loaded".to_string())
                } else {
                    match handler.set_property("pause", false) {
                        Ok(()) => MediaEvent::PlayResolved,
                        Err(e) => MediaEvent::PlayRejected(format!("{:?}", e)),
                    }
                };
                state.notify(event_tx, outcome)?;
            }
            MediaCommand::Pause => {
                if let Err(e) = handler.set_property("pause", true) {
                    warn!(error = ?e, "MPV failed to pause");
                }
            }
            MediaCommand::SetVolume(volume) => {
                // MPV volume is a percentage.
                if let Err(e) = handler.set_property("volume", volume * 100.0) {
                    warn!(error = ?e, volume, "MPV failed to set volume");
                }
            }
            MediaCommand::SetCurrentTime(seconds) => {
                if let Err(e) = handler.command(&["seek", &seconds.to_string(), "absolute"]) {
                    warn!(error = ?e, seconds, "MPV failed to seek");
                }
            }
            MediaCommand::Subscribe(subscription) => state.subscribe(subscription),
            MediaCommand::Unsubscribe => state.subscription = None,
            MediaCommand::Quit => return Ok(false),
        }
    }
}

/// Waits up to [`EVENT_WAIT_SECS`] for an MPV event and forwards it.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    state: &mut WorkerState,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(EVENT_WAIT_SECS) else {
        return Ok(());
    };

    if let Some(event) = translate(mpv_event, state) {
        state.notify(event_tx, event)?;
    }

    Ok(())
}

/// Maps an MPV event onto a media event.
///
/// Returns `None` for events nobody listens to and for anything left over
/// from the file played before the last load.
pub(crate) fn translate(mpv_event: mpv::Event, state: &mut WorkerState) -> Option<MediaEvent> {
    if matches!(mpv_event, mpv::Event::StartFile) {
        state.awaiting_start = false;
        return None;
    }
    if state.awaiting_start {
        trace!("Dropping MPV event queued before the last load");
        return None;
    }

    match mpv_event {
        mpv::Event::PropertyChange { name, change, .. } => property_event(name, change, state),
        mpv::Event::FileLoaded => Some(MediaEvent::CanPlay),
        mpv::Event::EndFile(result) => match result {
            Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF) => {
                state.loaded = false;
                Some(MediaEvent::Ended)
            }
            Ok(_) => None,
            Err(e) => {
                state.loaded = false;
                Some(MediaEvent::Error(format!("{:?}", e)))
            }
        },
        _ => None,
    }
}

/// Maps an observed property change onto a media event.
pub(crate) fn property_event(
    name: &str,
    change: Format,
    state: &WorkerState,
) -> Option<MediaEvent> {
    match (name, change) {
        ("duration", Format::Double(duration)) => Some(MediaEvent::LoadedMetadata(duration)),
        ("time-pos", Format::Double(seconds)) if seconds >= 0.0 => {
            Some(MediaEvent::TimeUpdate(seconds))
        }
        ("pause", Format::Flag(true)) if state.loaded => Some(MediaEvent::Paused),
        ("pause", Format::Flag(false)) if state.loaded => Some(MediaEvent::Playing),
        _ => None,
    }
}

/// Resolves a track source against the media root.
///
/// Anything that looks like a URL is handed to MPV untouched.
pub(crate) fn resolve_source(media_root: &str, source: &str) -> String {
    if media_root.is_empty() || source.contains("://") {
        return source.to_string();
    }

    format!(
        "{}/{}",
        media_root.trim_end_matches('/'),
        source.trim_start_matches('/')
    )
}
