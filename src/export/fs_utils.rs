// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Verifies that a file can be created or overwritten.
///
/// - If the file does NOT exist → Ok
/// - If it exists and `force` is set → Ok
/// - If it exists and `force == false` → asks the user.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("Файл '{}' уже существует.", path.display()));

    print!("Перезаписать? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_lowercase();

    if ["y", "yes", "д", "да"].contains(&ans.as_str()) {
        info("Существующий файл будет перезаписан.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "conversion cancelled: existing file not overwritten",
        )))
    }
}

/// Output path for `input` inside `out_dir`: the last extension is replaced
/// by `.xlsx` ("report.v2.docx" → "report.v2.xlsx", "notes" → "notes.xlsx").
pub fn output_path_for(input: &Path, out_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "report".into());

    let mut name = stem;
    name.push(".xlsx");
    out_dir.join(name)
}
