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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette and converts colours
//! to the hexadecimal form terminal emulators accept for background styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) current_row_bg: Color,
    pub(crate) cursor_row_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(30, 18, 48),
            accent_colour: Color::Rgb(168, 85, 247),
            highlight_colour: Color::Rgb(236, 72, 153),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_colour: Color::Rgb(59, 130, 246),
            gauge_track_colour: Color::Rgb(55, 40, 75),
            error_colour: Color::Rgb(239, 68, 68),

            title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(209, 213, 219),
            muted_fg: Color::Rgb(156, 163, 175),
            current_row_bg: Color::Rgb(88, 28, 135),
            cursor_row_bg: Color::Rgb(55, 40, 75),
        }
    }

    /// Converts a colour into a CSS-style hexadecimal string.
    ///
    /// Returns `None` for anything other than [`Color::Rgb`].
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
