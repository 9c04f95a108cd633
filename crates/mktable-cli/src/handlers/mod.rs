pub mod export;
pub mod import;
pub mod interactive;
pub mod render;

use crate::config::Config;
use crate::input;
use crate::types::InputFormat;
use anyhow::Result;
use mktable_core::Table;
use std::path::Path;

/// Reads a row file into a table drawn with the configured style.
pub(crate) fn load_table(path: &Path, format: InputFormat, config: &Config) -> Result<Table> {
    let rows = input::read_rows_from(path, format, &config.input)?;
    let mut table = Table::with_style(config.style.clone());
    table.add_rows(rows);
    Ok(table)
}
