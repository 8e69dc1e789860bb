// src/export/mod.rs

mod fs_utils;
mod xlsx;

pub use fs_utils::{ensure_writable, output_path_for};
pub use xlsx::export_grid;
