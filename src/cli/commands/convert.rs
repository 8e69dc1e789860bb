use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::convert::convert_directory;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        table,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(index) = table {
            cfg.table_index = *index;
        }

        let in_dir = input.as_deref().unwrap_or(&cfg.input_dir).to_string();
        let out_dir = output.as_deref().unwrap_or(&cfg.output_dir).to_string();

        convert_directory(Path::new(&in_dir), Path::new(&out_dir), &cfg)?;
    }
    Ok(())
}
