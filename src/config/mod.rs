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

//! Application configuration.
//!
//! This module manages the application configuration file: the initial
//! volume, where track sources live, the default log filter and the playlist
//! itself.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    error::PlaylistError,
    model::{
        Track,
        playlist::{Playlist, default_tracks},
    },
    player::controller::DEFAULT_VOLUME,
};

pub(crate) const CONFIG_NAME: &str = "tunedeck";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) volume: f64,
    /// Base directory or URL that relative track sources are resolved
    /// against. Empty means sources are used as-is.
    pub(crate) media_root: String,
    /// Default `tracing` filter, `RUST_LOG` takes precedence.
    pub(crate) log_level: String,
    pub(crate) tracks: Vec<Track>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            volume: DEFAULT_VOLUME,
            media_root: String::new(),
            log_level: "info".to_string(),
            tracks: default_tracks(),
        }
    }
}

impl AppConfig {
    /// Validates the configured tracks into a playlist.
    pub(crate) fn playlist(&self) -> Result<Playlist, PlaylistError> {
        Playlist::new(self.tracks.clone())
    }
}

/// Loads the configuration, falling back to defaults when it is missing or
/// unreadable.
///
/// The load error, if any, is handed back so it can be logged once logging
/// is up.
pub(crate) fn load_config() -> (AppConfig, Option<confy::ConfyError>) {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Directory holding the configuration file, also used for the log file.
pub(crate) fn config_dir() -> Result<PathBuf> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to resolve configuration path")?;
    path.parent()
        .map(|p| p.to_path_buf())
        .context("Configuration path has no parent directory")
}

#[cfg(test)]
mod tests;
