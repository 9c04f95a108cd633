use super::load_table;
use crate::config::Config;
use crate::input;
use crate::types::InputFormat;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use mktable_core::{Cell, ImportMethod, Table};
use std::io::Write;
use std::path::Path;

pub struct ImportArgs<'a> {
    pub mapping: &'a Path,
    pub method: &'a str,
    pub index: usize,
    pub base: Option<&'a Path>,
    pub input_format: InputFormat,
}

pub fn handle(args: ImportArgs<'_>, config: &Config, out: &mut dyn Write) -> Result<()> {
    let method: ImportMethod = args.method.parse()?;

    let mapping: IndexMap<String, Vec<Cell>> = serde_json::from_reader(input::open(args.mapping)?)
        .with_context(|| format!("Invalid JSON mapping in {}", args.mapping.display()))?;

    let mut table = match args.base {
        Some(base) => load_table(base, args.input_format, config)?,
        None => Table::with_style(config.style.clone()),
    };

    table.import_mapping(mapping, method, args.index)?;
    write!(out, "{}", table.render()?)?;
    Ok(())
}
