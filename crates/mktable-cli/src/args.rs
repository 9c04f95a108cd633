use crate::types::{InputFormat, LogLevel};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mktable")]
#[command(about = "Draw bordered ASCII tables from rows of text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $MKTABLE_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for the `[style]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    #[arg(long, global = true, help = "Column separator glyph")]
    pub vertical: Option<char>,

    #[arg(long, global = true, help = "Border fill glyph")]
    pub horizontal: Option<char>,

    #[arg(long, global = true, help = "Border junction glyph")]
    pub junction: Option<char>,

    #[arg(long, global = true, help = "Text shown for empty cells")]
    pub empty: Option<String>,
}

/// Overrides for the `[input]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[arg(long, global = true, help = "Cell delimiter for line input")]
    pub delimiter: Option<String>,

    #[arg(long, global = true, help = "Cell value that stands for an empty cell")]
    pub empty_token: Option<String>,

    #[arg(long, global = true, help = "Cell value that ends line input")]
    pub exit_token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type rows one line at a time, then print the table (default)
    Interactive,

    /// Print a table read from a file
    Render {
        #[arg(help = "Row file, or '-' for stdin")]
        input: PathBuf,

        #[arg(long, default_value = "lines")]
        input_format: InputFormat,
    },

    /// Print a file's rows as a JSON object of header name to column values
    Export {
        #[arg(help = "Row file, or '-' for stdin")]
        input: PathBuf,

        #[arg(long, default_value = "lines")]
        input_format: InputFormat,
    },

    /// Load a JSON mapping of header name to column values and print the table
    Import {
        #[arg(help = "JSON mapping file, or '-' for stdin")]
        mapping: PathBuf,

        #[arg(long, default_value = "append", help = "append, insert or overwrite")]
        method: String,

        #[arg(long, default_value = "0", help = "First row index for the insert method")]
        index: usize,

        #[arg(long, help = "Row file to import into (default: empty table)")]
        base: Option<PathBuf>,

        #[arg(long, default_value = "lines")]
        input_format: InputFormat,
    },
}
