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

//! A scripted media element for tests.

use crate::error::{MediaError, MediaResult};

use super::{MediaElement, Subscription};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SetSource(String),
    Load,
    Play,
    Pause,
    SetVolume(f64),
    SetCurrentTime(f64),
    Subscribe(Subscription),
    Unsubscribe,
}

/// Records every command; never emits anything on its own.
#[derive(Default)]
pub(crate) struct FakeMediaElement {
    pub(crate) calls: Vec<Call>,
    pub(crate) subscription: Option<Subscription>,
    pub(crate) fail_play: bool,
}

impl FakeMediaElement {
    pub(crate) fn plays_since_last_load(&self) -> usize {
        self.calls
            .iter()
            .rev()
            .take_while(|c| **c != Call::Load)
            .filter(|c| **c == Call::Play)
            .count()
    }

    pub(crate) fn last_source(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::SetSource(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl MediaElement for FakeMediaElement {
    fn set_source(&mut self, source: &str) -> MediaResult<()> {
        self.calls.push(Call::SetSource(source.to_string()));
        Ok(())
    }

    fn load(&mut self) -> MediaResult<()> {
        self.calls.push(Call::Load);
        Ok(())
    }

    fn play(&mut self) -> MediaResult<()> {
        if self.fail_play {
            return Err(MediaError::Disconnected);
        }
        self.calls.push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) -> MediaResult<()> {
        self.calls.push(Call::Pause);
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> MediaResult<()> {
        self.calls.push(Call::SetVolume(volume));
        Ok(())
    }

    fn set_current_time(&mut self, seconds: f64) -> MediaResult<()> {
        self.calls.push(Call::SetCurrentTime(seconds));
        Ok(())
    }

    fn subscribe(&mut self, subscription: Subscription) -> MediaResult<()> {
        assert!(
            self.subscription.is_none(),
            "subscribed while another subscription was live"
        );
        self.calls.push(Call::Subscribe(subscription));
        self.subscription = Some(subscription);
        Ok(())
    }

    fn unsubscribe(&mut self) -> MediaResult<()> {
        self.calls.push(Call::Unsubscribe);
        self.subscription = None;
        Ok(())
    }
}
