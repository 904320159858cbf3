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

//! Progress bar with elapsed and total time; click or press a digit to seek.

mod event;
mod render;

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ProgressAction {
    /// Seek to a fraction of the track, in `0.0..=1.0`.
    Seek(f64),
}

#[derive(Debug, Default)]
pub(crate) struct ProgressView {
    gauge_area: Rect,
}

impl ProgressView {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests;
