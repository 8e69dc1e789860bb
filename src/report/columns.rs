use crate::config::Config;
use serde::{Deserialize, Serialize};

/// Where a newly discovered date column is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// Right after the employee column: the last date found ends up first.
    #[default]
    Reverse,
    /// Right before the trailing columns, in the order dates are found.
    Discovery,
}

/// Ordered, unique report column labels.
///
/// Layout: `[employee, date.., method, period, task]`. The three trailing
/// columns never move; date columns are only ever inserted between them and
/// the employee column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    labels: Vec<String>,
}

impl ColumnSet {
    pub fn new(employee: &str, method: &str, period: &str, task: &str) -> Self {
        Self {
            labels: vec![
                employee.to_string(),
                method.to_string(),
                period.to_string(),
                task.to_string(),
            ],
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            &cfg.column_employee,
            &cfg.column_method,
            &cfg.column_period,
            &cfg.column_task,
        )
    }

    /// Add a date label unless it is already present. Returns true if added.
    pub fn add_date(&mut self, label: &str, order: DateOrder) -> bool {
        if self.index_of(label).is_some() {
            return false;
        }

        let at = match order {
            DateOrder::Reverse => 1,
            DateOrder::Discovery => self.labels.len() - 3,
        };
        self.labels.insert(at, label.to_string());
        true
    }

    /// True if `label` is the employee column or one of the trailing columns.
    pub fn is_fixed(&self, label: &str) -> bool {
        let n = self.labels.len();
        self.labels[0] == label || self.labels[n - 3..].iter().any(|l| l == label)
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn date_labels(&self) -> &[String] {
        &self.labels[1..self.labels.len() - 3]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn employee_index(&self) -> usize {
        0
    }

    pub fn method_index(&self) -> usize {
        self.labels.len() - 3
    }

    pub fn period_index(&self) -> usize {
        self.labels.len() - 2
    }

    pub fn task_index(&self) -> usize {
        self.labels.len() - 1
    }
}
