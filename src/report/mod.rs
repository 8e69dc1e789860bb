//! Shift report builder: pivots the shift table into one column per date
//! and splits or upgrades shifts according to the overtime rules.

mod builder;
mod classify;
mod columns;
mod date;
mod grid;
mod time;

pub use builder::{ShiftRecord, build_grid, build_report, derive_columns};
pub use classify::{Classification, Compensation, ShiftRules};
pub use columns::{ColumnSet, DateOrder};
pub use date::{HolidayCalendar, is_weekend, normalize_date, parse_date};
pub use grid::{Grid, ReportRow};
pub use time::{minutes_to_time, split_time_range, time_to_minutes};
