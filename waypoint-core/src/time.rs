//! Wall-clock formatting
//!
//! Converts an epoch-like second count into civil date/time fields and
//! renders a small strftime subset. The phone sends local wall-clock time,
//! so no time zone is applied.

use core::fmt::Write;

use chrono::{DateTime, Datelike, Timelike, Utc};
use heapless::String;

/// Capacity of a formatted time string
pub const TIME_TEXT_LEN: usize = 32;

/// Formatted time string
pub type TimeText = String<TIME_TEXT_LEN>;

/// Broken-down date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CivilTime {
    pub year: i32,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilTime {
    /// Split seconds since 1970-01-01T00:00:00 into calendar fields
    pub fn from_epoch(epoch_s: u32) -> Self {
        // Every u32 second count is in chrono's range
        let t = DateTime::<Utc>::from_timestamp(i64::from(epoch_s), 0).unwrap_or_default();

        Self {
            year: t.year(),
            month: t.month() as u8,
            day: t.day() as u8,
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        }
    }
}

/// Render `epoch_s` with a strftime-style `pattern`
///
/// Supported: `%H %M %S %d %m %y %Y %%`. Unknown specifiers are copied
/// through verbatim. Output beyond [`TIME_TEXT_LEN`] is dropped.
pub fn format_epoch(epoch_s: u32, pattern: &str) -> TimeText {
    let t = CivilTime::from_epoch(epoch_s);
    let mut out = TimeText::new();
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            if out.push(ch).is_err() {
                break;
            }
            continue;
        }

        let written = match chars.next() {
            Some('H') => write!(out, "{:02}", t.hour),
            Some('M') => write!(out, "{:02}", t.minute),
            Some('S') => write!(out, "{:02}", t.second),
            Some('d') => write!(out, "{:02}", t.day),
            Some('m') => write!(out, "{:02}", t.month),
            Some('y') => write!(out, "{:02}", t.year.rem_euclid(100)),
            Some('Y') => write!(out, "{}", t.year),
            Some('%') => out.push('%').map_err(|_| core::fmt::Error),
            Some(other) => write!(out, "%{}", other),
            None => out.push('%').map_err(|_| core::fmt::Error),
        };

        if written.is_err() {
            break;
        }
    }

    out
}
