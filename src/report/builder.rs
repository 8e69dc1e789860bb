//! Turns the rows of a shift table into the pivoted report grid.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::report::classify::{Classification, Compensation, ShiftRules};
use crate::report::columns::ColumnSet;
use crate::report::date::{normalize_date, parse_date};
use crate::report::grid::{Grid, ReportRow};
use crate::report::time::{split_time_range, time_to_minutes};

/// Cells of one table row, by position.
const NAME: usize = 0;
const DATE: usize = 2;
const HOURS: usize = 3;
const PERIOD: usize = 4;
const TASK: usize = 5;
const MIN_CELLS: usize = 6;

/// A shift as read from the table: `[name, _, date, hours, range, task]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRecord {
    /// Row number in the source table (the header is row 0).
    pub row: usize,
    pub name: String,
    pub date: String,
    pub hours: String,
    pub time_range: String,
    pub task: String,
}

impl ShiftRecord {
    pub fn from_cells<S: AsRef<str>>(row: usize, cells: &[S]) -> AppResult<Self> {
        if cells.len() < MIN_CELLS {
            return Err(AppError::MalformedRow {
                row,
                cells: cells.len(),
            });
        }

        let cell = |i: usize| cells[i].as_ref().to_string();
        Ok(Self {
            row,
            name: cell(NAME),
            date: cell(DATE),
            hours: cell(HOURS),
            time_range: cell(PERIOD),
            task: cell(TASK),
        })
    }
}

fn records<S: AsRef<str>>(rows: &[Vec<S>]) -> AppResult<Vec<ShiftRecord>> {
    rows.iter()
        .enumerate()
        .map(|(i, cells)| ShiftRecord::from_cells(i + 1, cells))
        .collect()
}

/// Collect the report columns for `rows` (header row already removed).
pub fn derive_columns<S: AsRef<str>>(rows: &[Vec<S>], cfg: &Config) -> AppResult<ColumnSet> {
    let mut columns = ColumnSet::from_config(cfg);

    for record in records(rows)? {
        let label = normalize_date(&record.date)?;
        if columns.is_fixed(&label) {
            return Err(AppError::Config(format!(
                "date {label} in row {} matches a fixed column label",
                record.row
            )));
        }
        columns.add_date(&label, cfg.date_order);
    }

    Ok(columns)
}

/// Fill the grid for `rows` over the columns from `derive_columns`.
pub fn build_grid<S: AsRef<str>>(
    rows: &[Vec<S>],
    columns: &ColumnSet,
    cfg: &Config,
) -> AppResult<Grid> {
    let rules = ShiftRules::from_config(cfg)?;
    let mut grid = Grid::new(columns);

    for record in records(rows)? {
        for report_row in shift_rows(&record, columns, &rules)? {
            grid.push(report_row.to_cells(columns, &rules));
        }
    }

    Ok(grid)
}

/// Full pipeline for a table as read from the document: row 0 is the
/// header and is skipped.
pub fn build_report<S: AsRef<str>>(table: &[Vec<S>], cfg: &Config) -> AppResult<Grid> {
    let rows = table.get(1..).unwrap_or_default();
    let columns = derive_columns(rows, cfg)?;
    build_grid(rows, &columns, cfg)
}

/// One shift becomes one row, or two when it crosses the night cutoff.
fn shift_rows(
    record: &ShiftRecord,
    columns: &ColumnSet,
    rules: &ShiftRules,
) -> AppResult<Vec<ReportRow>> {
    let label = normalize_date(&record.date)?;
    let date_column = columns
        .index_of(&label)
        .ok_or_else(|| AppError::Other(format!("no column for date {label}")))?;
    let date = parse_date(&record.date)?;

    let (start, end) = split_time_range(&record.time_range)?;
    let start_min = time_to_minutes(&start)?;
    let end_min = time_to_minutes(&end)?;

    let mut first = ReportRow {
        name: record.name.clone(),
        date_column,
        hours: record.hours.clone(),
        compensation: Compensation::Normal,
        period: format!("{start} - {end}"),
        task: record.task.clone(),
    };

    match rules.classify(date, start_min, end_min) {
        Classification::Normal => Ok(vec![first]),
        Classification::Elevated => {
            first.compensation = Compensation::Elevated;
            Ok(vec![first])
        }
        Classification::Split { before, after } => {
            let cutoff = rules.cutoff_label();
            first.hours = rules.render_minutes(before);
            first.period = format!("{start} - {cutoff}");

            let second = ReportRow {
                name: record.name.clone(),
                date_column,
                hours: rules.render_minutes(after),
                compensation: Compensation::Elevated,
                period: format!("{cutoff} - {end}"),
                task: record.task.clone(),
            };
            Ok(vec![first, second])
        }
    }
}
