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

use tempfile::tempdir;

use super::AppConfig;
use crate::error::PlaylistError;
use crate::model::Track;

#[test]
fn defaults_carry_seed_playlist() {
    let config = AppConfig::default();

    assert_eq!(config.version, 1);
    assert_eq!(config.volume, 0.7);
    assert_eq!(config.log_level, "info");
    assert!(config.media_root.is_empty());

    let playlist = config.playlist().unwrap();
    assert_eq!(playlist.len(), 7);
    assert_eq!(playlist.get(0).unwrap().title, "Jungle Waves");
}

#[test]
fn stored_config_loads_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tunedeck.toml");

    let mut config = AppConfig::default();
    config.volume = 0.25;
    config.media_root = "/srv/music".to_string();
    config.tracks.truncate(2);

    confy::store_path(&path, &config).unwrap();
    let loaded: AppConfig = confy::load_path(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tunedeck.toml");
    std::fs::write(&path, "volume = 0.4\n").unwrap();

    let loaded: AppConfig = confy::load_path(&path).unwrap();

    assert_eq!(loaded.volume, 0.4);
    assert_eq!(loaded.log_level, "info");
    assert_eq!(loaded.tracks.len(), 7);
}

#[test]
fn tracks_without_cover_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tunedeck.toml");
    std::fs::write(
        &path,
        r#"
[[tracks]]
id = 10
title = "Intro"
artist = "Someone"
source_path = "intro.ogg"
"#,
    )
    .unwrap();

    let loaded: AppConfig = confy::load_path(&path).unwrap();

    assert_eq!(
        loaded.tracks,
        vec![Track::new(10, "Intro", "Someone", "intro.ogg", None)]
    );
}

#[test]
fn playlist_rejects_invalid_tracks() {
    let mut config = AppConfig::default();
    config.tracks[1].id = config.tracks[0].id;
    assert_eq!(config.playlist().unwrap_err(), PlaylistError::DuplicateId(1));

    config.tracks.clear();
    assert_eq!(config.playlist().unwrap_err(), PlaylistError::Empty);
}
