use super::load_table;
use crate::config::Config;
use crate::types::InputFormat;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Writes the file's rows as a pretty JSON object of header to column values.
pub fn handle(input: &Path, format: InputFormat, config: &Config, out: &mut dyn Write) -> Result<()> {
    let table = load_table(input, format, config)?;
    let mapping = table.export_mapping();
    writeln!(out, "{}", serde_json::to_string_pretty(&mapping)?)?;
    Ok(())
}
