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

/// Formats a position or duration in seconds as `M:SS`.
///
/// Minutes are not capped, so an hour-long track reads `60:00`. Anything
/// that is not a finite, non-negative number formats as `0:00`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub(crate) fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Formats a volume in `0.0..=1.0` as a whole percentage.
pub(crate) fn format_volume(volume: f64) -> String {
    format!("{}%", (volume.clamp(0.0, 1.0) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn unusable_values_format_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn volume_is_a_rounded_percentage() {
        assert_eq!(format_volume(0.7), "70%");
        assert_eq!(format_volume(1.4), "100%");
        assert_eq!(format_volume(0.0), "0%");
    }
}
