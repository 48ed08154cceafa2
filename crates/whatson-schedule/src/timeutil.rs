//! Time-of-day parsing and formatting.
//!
//! Schedule air times arrive as `"HH:MM"`; user-supplied filters also use
//! `"8:00 PM"`, bare hours, and similar. Everything compares as minutes
//! since midnight; the minute value itself is never shown to the user.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for the leading hour/minute part of a time string.
#[allow(clippy::expect_used)]
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2})(?::(\d{2}))?").expect("failed to compile time regex"));

/// Parses a time-of-day string into minutes since midnight.
///
/// Accepts `"HH:MM"` (24-hour), `"H:MM AM/PM"`, `"H:MM"`, and bare hours.
/// The AM/PM marker is detected case-insensitively anywhere after the
/// numeric part; `12 AM` maps to hour 0 and any PM hour below 12 advances
/// by twelve. Returns `None` for empty or unparseable input; callers must
/// branch on emptiness before treating a show as timed.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn parse_time_of_day(raw: &str) -> Option<u32> {
    let caps = TIME_RE.captures(raw)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let rest = raw.get(caps.get(0)?.end()..)?.to_uppercase();
    let is_pm = rest.contains("PM");
    let is_am = rest.contains("AM");

    let hour = if is_pm && hour < 12 {
        hour + 12
    } else if is_am && hour == 12 {
        0
    } else {
        hour
    };

    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Formats minutes since midnight as a `"HH:MM"` display string.
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn format_time_of_day(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_24_hour() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day("20:00"), Some(1200));
        assert_eq!(parse_time_of_day("00:00"), Some(0));
        assert_eq!(parse_time_of_day("23:59"), Some(1439));
    }

    #[test]
    fn test_parse_12_hour_pm() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day("8:00 PM"), Some(1200));
        assert_eq!(parse_time_of_day("8:00pm"), Some(1200));
        assert_eq!(parse_time_of_day("12:30 PM"), Some(750));
    }

    #[test]
    fn test_parse_12_hour_am() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day("8:00 AM"), Some(480));
        // Midnight: 12 AM is hour zero
        assert_eq!(parse_time_of_day("12:00 AM"), Some(0));
    }

    #[test]
    fn test_parse_bare_hour() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day("8"), Some(480));
        assert_eq!(parse_time_of_day("8 pm"), Some(1200));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day("25:00"), None);
        assert_eq!(parse_time_of_day("10:75"), None);
    }

    #[test]
    fn test_parse_rejects_non_times() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day(""), None);
        assert_eq!(parse_time_of_day("TBA"), None);
        assert_eq!(parse_time_of_day("soon"), None);
    }

    #[test]
    fn test_parse_leading_whitespace() {
        // Arrange & Act & Assert
        assert_eq!(parse_time_of_day("  9:15"), Some(555));
    }

    #[test]
    fn test_format_time_of_day() {
        // Arrange & Act & Assert
        assert_eq!(format_time_of_day(1200), "20:00");
        assert_eq!(format_time_of_day(0), "00:00");
        assert_eq!(format_time_of_day(555), "09:15");
    }

    #[test]
    fn test_parse_format_round_trip() {
        // Arrange
        let inputs = ["20:00", "09:15", "00:00", "23:59"];

        // Act & Assert
        for input in inputs {
            let minutes = parse_time_of_day(input).unwrap();
            assert_eq!(format_time_of_day(minutes), input);
        }
    }
}
