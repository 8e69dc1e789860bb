use crate::report::classify::{Compensation, ShiftRules};
use crate::report::columns::ColumnSet;
use unicode_width::UnicodeWidthStr;

/// One output line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    /// Index of the date column that receives `hours`.
    pub date_column: usize,
    pub hours: String,
    pub compensation: Compensation,
    pub period: String,
    pub task: String,
}

impl ReportRow {
    /// Lay the row out over `columns`; every other date column stays empty.
    pub fn to_cells(&self, columns: &ColumnSet, rules: &ShiftRules) -> Vec<Option<String>> {
        let mut cells = vec![None; columns.len()];
        cells[columns.employee_index()] = Some(self.name.clone());
        cells[self.date_column] = Some(self.hours.clone());
        cells[columns.method_index()] = Some(rules.label(self.compensation).to_string());
        cells[columns.period_index()] = Some(self.period.clone());
        cells[columns.task_index()] = Some(self.task.clone());
        cells
    }
}

/// Header plus sparse data rows, ready for the spreadsheet writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    header: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    pub fn new(columns: &ColumnSet) -> Self {
        Self {
            header: columns.labels().to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, cells: Vec<Option<String>>) {
        debug_assert_eq!(cells.len(), self.header.len());
        self.rows.push(cells);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Cell text of data row `row` (0-based, header excluded).
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Per column: widest text (header included) plus one.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (c, cell) in row.iter().enumerate() {
                if let Some(v) = cell {
                    widths[c] = widths[c].max(UnicodeWidthStr::width(v.as_str()));
                }
            }
        }

        widths.iter().map(|w| w + 1).collect()
    }
}
