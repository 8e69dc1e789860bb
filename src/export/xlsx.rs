// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::report::Grid;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, Worksheet};
use std::fs;
use std::io;
use std::path::Path;

/// Write the report grid to a single-sheet workbook.
///
/// Row 1 is the header with a solid `header_rgb` fill; data starts at row 2.
/// Empty cells stay blank and every column gets the width hint from the grid.
pub fn export_grid(grid: &Grid, path: &Path, header_rgb: u32) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    write_sheet(worksheet, grid, header_rgb)?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    workbook.save(path_str(path)?)?;
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, grid: &Grid, header_rgb: u32) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_background_color(Color::RGB(header_rgb))
        .set_pattern(FormatPattern::Solid);

    for (col, label) in grid.header().iter().enumerate() {
        worksheet.write_with_format(0, col_index(col)?, label.as_str(), &header_format)?;
    }

    // ---------------------------
    // Data rows
    // ---------------------------
    for (r, cells) in grid.rows().iter().enumerate() {
        let row = u32::try_from(r + 1)
            .map_err(|_| AppError::Other(format!("too many rows: {}", r + 1)))?;

        for (col, cell) in cells.iter().enumerate() {
            if let Some(value) = cell {
                worksheet.write(row, col_index(col)?, value.as_str())?;
            }
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (col, width) in grid.column_widths().iter().enumerate() {
        worksheet.set_column_width(col_index(col)?, *width as f64)?;
    }

    Ok(())
}

fn col_index(col: usize) -> AppResult<u16> {
    u16::try_from(col).map_err(|_| AppError::Other(format!("too many columns: {col}")))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
