use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftsheet
/// CLI application to turn overtime shift tables (.docx) into .xlsx reports
#[derive(Parser)]
#[command(
    name = "shiftsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert overtime shift tables from .docx documents into pivoted .xlsx reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default settings
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate cutoff, holidays, colors and labels")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Convert every document of a directory
    Convert {
        #[arg(
            long,
            short = 'i',
            value_name = "DIR",
            help = "Input directory (default from config: src)"
        )]
        input: Option<String>,

        #[arg(
            long,
            short = 'o',
            value_name = "DIR",
            help = "Output directory (default from config: dist)"
        )]
        output: Option<String>,

        #[arg(
            long,
            short = 't',
            value_name = "INDEX",
            help = "Zero-based index of the shift table in each document"
        )]
        table: Option<usize>,
    },

    /// Convert a single document
    File {
        /// Input .docx document
        input: String,

        #[arg(
            long,
            short = 'o',
            value_name = "FILE",
            help = "Output .xlsx file (default: next to the input)"
        )]
        output: Option<String>,

        #[arg(
            long,
            short = 't',
            value_name = "INDEX",
            help = "Zero-based index of the shift table"
        )]
        table: Option<usize>,

        #[arg(long, short = 'f', help = "Overwrite the output without confirmation")]
        force: bool,
    },

    /// List the tables found in a document
    Inspect {
        /// Input .docx document
        input: String,
    },
}
