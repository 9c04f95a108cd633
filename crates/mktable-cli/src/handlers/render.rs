use super::load_table;
use crate::config::Config;
use crate::types::InputFormat;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn handle(input: &Path, format: InputFormat, config: &Config, out: &mut dyn Write) -> Result<()> {
    let table = load_table(input, format, config)?;
    write!(out, "{}", table.render()?)?;
    Ok(())
}
