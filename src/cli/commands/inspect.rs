use crate::cli::parser::Commands;
use crate::config::Config;
use crate::docx::DocxDocument;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use std::path::Path;

/// Print every body table with its size and first row, marking the one
/// the converter would read.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { input } = cmd {
        let document = DocxDocument::open(Path::new(input))?;
        header(format!("{input}: таблиц {}", document.table_count()));

        if document.table_count() == 0 {
            warning("Таблицы не найдены");
            return Ok(());
        }

        for (i, table) in document.tables().iter().enumerate() {
            let columns = table.iter().map(Vec::len).max().unwrap_or(0);
            let marker = if i == cfg.table_index { "▶" } else { " " };
            let first = table
                .first()
                .map(|r| r.join(" | ").replace('\n', " "))
                .unwrap_or_default();

            println!(
                "{marker} [{i}] строк: {:<4} столбцов: {:<3} {first}",
                table.len(),
                columns
            );
        }
    }
    Ok(())
}
