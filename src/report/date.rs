//! Shift dates: normalization to DD.MM.YYYY and the holiday calendar.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Normalize a "D.M.YY" style date to "DD.MM.YYYY".
///
/// Two-digit years get a "20" prefix; day and month are zero-padded.
pub fn normalize_date(raw: &str) -> AppResult<String> {
    let (day, month, year) = split_date(raw)?;
    Ok(format!("{day:0>2}.{month:0>2}.{year}"))
}

/// Parse a shift date (any form accepted by `normalize_date`) into a calendar date.
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let (day, month, year) = split_date(raw)?;

    let invalid = || AppError::InvalidDate(raw.trim().to_string());
    let d = day.parse::<u32>().map_err(|_| invalid())?;
    let m = month.parse::<u32>().map_err(|_| invalid())?;
    let y = year.parse::<i32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

/// Saturday or Sunday (ISO weekday 6 or 7).
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn split_date(raw: &str) -> AppResult<(String, String, String)> {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();

    let [day, month, year] = parts.as_slice() else {
        return Err(AppError::InvalidDate(trimmed.to_string()));
    };

    if [day, month, year]
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(AppError::InvalidDate(trimmed.to_string()));
    }

    let year = if year.len() == 2 {
        format!("20{year}")
    } else {
        year.to_string()
    };

    Ok((day.to_string(), month.to_string(), year))
}

/// Set of non-working days that are always paid at the elevated rate.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    days: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn from_strings<S: AsRef<str>>(dates: &[S]) -> AppResult<Self> {
        let days = dates
            .iter()
            .map(|d| parse_date(d.as_ref()))
            .collect::<AppResult<HashSet<_>>>()?;
        Ok(Self { days })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
