use crate::config::Config;
use crate::docx::DocxDocument;
use crate::errors::AppResult;
use crate::export::{export_grid, output_path_for};
use crate::report::build_report;
use crate::ui::messages::{error, header, info, success, warning};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Report written; `rows` counts data rows (split shifts count twice).
    Saved { output: PathBuf, rows: usize },
    /// The document has no table at the configured index.
    TableNotFound,
}

/// Read table `cfg.table_index` of `input`, build the report and write it to `output`.
pub fn convert_document(input: &Path, output: &Path, cfg: &Config) -> AppResult<ConversionOutcome> {
    let document = DocxDocument::open(input)?;

    let table = match document.table(cfg.table_index) {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(ConversionOutcome::TableNotFound),
    };

    let grid = build_report(table, cfg)?;
    export_grid(&grid, output, cfg.header_rgb()?)?;

    Ok(ConversionOutcome::Saved {
        output: output.to_path_buf(),
        rows: grid.rows().len(),
    })
}

/// Print the per-document message for an outcome.
pub fn report_outcome(input: &Path, outcome: &ConversionOutcome) {
    match outcome {
        ConversionOutcome::Saved { output, .. } => {
            success(format!("Сохранено в файл {}", output.display()))
        }
        ConversionOutcome::TableNotFound => {
            warning(format!("Таблица не найдена: {}", input.display()))
        }
    }
}

/// Counters for a directory run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub saved: Vec<PathBuf>,
    pub missing_table: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.saved.len() + self.missing_table.len() + self.failed.len()
    }
}

/// Convert every file in `in_dir` into `out_dir`.
///
/// Files are processed in name order. A failure in one document is reported
/// and counted; the remaining documents are still converted.
pub fn convert_directory(in_dir: &Path, out_dir: &Path, cfg: &Config) -> AppResult<BatchSummary> {
    // config mistakes are reported once, not once per document
    cfg.ensure_valid()?;

    let inputs = list_inputs(in_dir)?;
    header(format!(
        "{} → {} ({} файлов)",
        in_dir.display(),
        out_dir.display(),
        inputs.len()
    ));

    let mut summary = BatchSummary::default();

    for input in inputs {
        let output = output_path_for(&input, out_dir);

        match convert_document(&input, &output, cfg) {
            Ok(outcome) => {
                report_outcome(&input, &outcome);
                match outcome {
                    ConversionOutcome::Saved { output, .. } => summary.saved.push(output),
                    ConversionOutcome::TableNotFound => summary.missing_table.push(input),
                }
            }
            Err(e) => {
                let kind = if e.is_format_error() {
                    "неверный формат данных"
                } else {
                    "ошибка"
                };
                error(format!("Ошибка обработки {} ({kind}): {e}", input.display()));
                summary.failed.push((input, e.to_string()));
            }
        }
    }

    info(format!(
        "Обработано: {}, сохранено: {}, без таблицы: {}, с ошибками: {}",
        summary.total(),
        summary.saved.len(),
        summary.missing_table.len(),
        summary.failed.len()
    ));

    Ok(summary)
}

/// Regular files of `dir` sorted by name, without Office lock files (`~$…`).
fn list_inputs(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            continue;
        }

        let is_lock_file = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with("~$"));
        if is_lock_file {
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}
