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

//! Unicode symbols for the TUI.
//!
//! These are chosen for coverage in common terminal fonts.

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";
pub(crate) const ICON_NEXT: &str = "\u{23ED}";
pub(crate) const ICON_PREV: &str = "\u{23EE}";

// Variation Selector-15 forces a monochrome glyph that takes the style's
// foreground colour instead of an emoji.
pub(crate) const ICON_VOLUME: &str = "\u{1F50A}\u{FE0E}";
pub(crate) const ICON_MUTED: &str = "\u{1F507}\u{FE0E}";

pub(crate) const ICON_NOTE: &str = "\u{266B}";
pub(crate) const ICON_COVER: &str = "\u{25A3}";
pub(crate) const ICON_ERROR: &str = "\u{26A0}";

/// Frames of the spinner shown next to the cover while playing.
pub(crate) const SPINNER: [&str; 4] = ["\u{25D0}", "\u{25D3}", "\u{25D1}", "\u{25D2}"];
