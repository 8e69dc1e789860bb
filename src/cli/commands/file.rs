use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert::{convert_document, report_outcome};
use crate::errors::AppResult;
use crate::export::{ensure_writable, output_path_for};
use std::path::{Path, PathBuf};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::File {
        input,
        output,
        table,
        force,
    } = cmd
    {
        cfg.ensure_valid()?;

        let mut cfg = cfg.clone();
        if let Some(index) = table {
            cfg.table_index = *index;
        }

        let input = Path::new(input);
        let output = match output {
            Some(o) => PathBuf::from(o),
            None => output_path_for(input, input.parent().unwrap_or(Path::new(""))),
        };

        ensure_writable(&output, *force)?;

        let outcome = convert_document(input, &output, &cfg)?;
        report_outcome(input, &outcome);
    }
    Ok(())
}
