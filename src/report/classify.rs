//! Overtime rate rules: night cutoff, weekends and holidays.

use crate::config::Config;
use crate::errors::AppResult;
use crate::report::date::{HolidayCalendar, is_weekend};
use crate::report::time::{minutes_to_time, time_to_minutes};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compensation {
    Normal,
    Elevated,
}

/// How a single shift is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Entirely before the cutoff on a working day.
    Normal,
    /// Starts at/after the cutoff, or falls on a weekend or holiday. Never split.
    Elevated,
    /// Starts before the cutoff and ends after it on a working day.
    /// Holds the minutes on each side of the cutoff.
    Split { before: i64, after: i64 },
}

/// Rules resolved once from `Config` and shared by every row of a document.
#[derive(Debug, Clone)]
pub struct ShiftRules {
    cutoff_minutes: i64,
    cutoff_label: String,
    holidays: HolidayCalendar,
    normal_label: String,
    elevated_label: String,
    zero_pad_minutes: bool,
}

impl ShiftRules {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let cutoff_label = cfg.night_cutoff.trim().to_string();
        Ok(Self {
            cutoff_minutes: time_to_minutes(&cutoff_label)?,
            cutoff_label,
            holidays: HolidayCalendar::from_strings(&cfg.holidays)?,
            normal_label: cfg.compensation_normal.clone(),
            elevated_label: cfg.compensation_elevated.clone(),
            zero_pad_minutes: cfg.zero_pad_minutes,
        })
    }

    /// The cutoff exactly as configured, used in split work periods.
    pub fn cutoff_label(&self) -> &str {
        &self.cutoff_label
    }

    pub fn label(&self, c: Compensation) -> &str {
        match c {
            Compensation::Normal => &self.normal_label,
            Compensation::Elevated => &self.elevated_label,
        }
    }

    pub fn is_day_off(&self, date: NaiveDate) -> bool {
        is_weekend(date) || self.holidays.contains(date)
    }

    /// Classify a shift given its date and start/end in minutes since midnight.
    ///
    /// The elevated check wins over splitting: a weekend shift that crosses
    /// the cutoff is elevated as a whole.
    pub fn classify(&self, date: NaiveDate, start: i64, end: i64) -> Classification {
        if start >= self.cutoff_minutes || self.is_day_off(date) {
            Classification::Elevated
        } else if end > self.cutoff_minutes {
            Classification::Split {
                before: self.cutoff_minutes.saturating_sub(start),
                after: end.saturating_sub(self.cutoff_minutes),
            }
        } else {
            Classification::Normal
        }
    }

    pub fn render_minutes(&self, minutes: i64) -> String {
        minutes_to_time(minutes, self.zero_pad_minutes)
    }
}
