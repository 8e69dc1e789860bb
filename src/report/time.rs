//! Time-of-day helpers: "H:MM" <-> minutes since midnight, and shift ranges.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("static whitespace pattern"));

/// Convert "H:MM" / "HH:MM" to minutes since midnight.
///
/// Values are not range-checked: "25:90" is 1590. A value too large to
/// count in minutes is `InvalidTime`.
pub fn time_to_minutes(s: &str) -> AppResult<i64> {
    let parts: Vec<&str> = s.split(':').collect();
    let [hours, minutes] = parts.as_slice() else {
        return Err(AppError::InvalidTime(s.to_string()));
    };

    let h = hours
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let m = minutes
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;

    h.checked_mul(60)
        .and_then(|v| v.checked_add(m))
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Render a non-negative minute count as hours worked.
///
/// Hours do not wrap at 24. Whole hours render as "H". Otherwise the minutes
/// follow a colon, unpadded ("1:5") unless `zero_pad` is set ("1:05").
pub fn minutes_to_time(minutes: i64, zero_pad: bool) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    if rest == 0 {
        hours.to_string()
    } else if zero_pad {
        format!("{hours}:{rest:02}")
    } else {
        format!("{hours}:{rest}")
    }
}

/// Split a "start - end" cell into its two time strings.
///
/// All whitespace is removed first, so "09:00 - 18:00" and "9:00-18:00" both
/// work. Anything other than exactly one hyphen is rejected.
pub fn split_time_range(s: &str) -> AppResult<(String, String)> {
    let compact = WHITESPACE.replace_all(s, "");
    let parts: Vec<&str> = compact.split('-').collect();

    match parts.as_slice() {
        [start, end] => Ok((start.to_string(), end.to_string())),
        _ => Err(AppError::InvalidTimeRange(s.to_string())),
    }
}
