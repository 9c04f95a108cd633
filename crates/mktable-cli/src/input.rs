//! Reading rows from typed lines, line files and CSV.

use crate::config::InputConfig;
use crate::types::InputFormat;
use anyhow::{Context, Result};
use mktable_core::Cell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Outcome of reading one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Row(Vec<Cell>),
    /// Blank line, ignored
    Skip,
    /// The exit token was entered
    End,
}

/// Splits input lines into cells using the configured tokens.
#[derive(Debug, Clone)]
pub struct LineParser {
    delimiter: String,
    empty_token: String,
    exit_token: String,
}

impl LineParser {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            delimiter: config.delimiter.clone(),
            empty_token: config.empty_token.clone(),
            exit_token: config.exit_token.clone(),
        }
    }

    /// A line containing the exit token as any cell ends input; the rest of
    /// that line is discarded. Empty-token cells become null cells.
    pub fn parse_line(&self, line: &str) -> Line {
        let line = line.trim();
        if line.is_empty() {
            return Line::Skip;
        }

        let cells: Vec<&str> = line.split(self.delimiter.as_str()).collect();
        if cells.contains(&self.exit_token.as_str()) {
            return Line::End;
        }

        Line::Row(
            cells
                .into_iter()
                .map(|cell| {
                    if cell == self.empty_token {
                        Cell::Null
                    } else {
                        Cell::from(cell)
                    }
                })
                .collect(),
        )
    }

    /// Reads rows until the exit token or end of input. `before_line` runs
    /// ahead of every read, which is where interactive prompts go.
    pub fn read_rows<R: BufRead>(
        &self,
        mut reader: R,
        mut before_line: impl FnMut() -> io::Result<()>,
    ) -> Result<Vec<Vec<Cell>>> {
        let mut rows = Vec::new();
        let mut buf = String::new();

        loop {
            before_line()?;
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                tracing::debug!(rows = rows.len(), "end of input");
                break;
            }

            match self.parse_line(&buf) {
                Line::Row(row) => rows.push(row),
                Line::Skip => {}
                Line::End => {
                    tracing::debug!(rows = rows.len(), "exit token read");
                    break;
                }
            }
        }

        Ok(rows)
    }
}

/// Reads CSV records as rows; records may have different lengths.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Vec<Cell>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("Invalid CSV record {}", i + 1))?;
        rows.push(record.iter().map(Cell::from).collect());
    }
    Ok(rows)
}

/// Opens `path` for reading; `-` means stdin.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Reads every row from `path` in the given format.
pub fn read_rows_from(
    path: &Path,
    format: InputFormat,
    config: &InputConfig,
) -> Result<Vec<Vec<Cell>>> {
    let reader = open(path)?;
    let rows = match format {
        InputFormat::Lines => LineParser::new(config).read_rows(reader, || Ok(()))?,
        InputFormat::Csv => read_csv(reader)?,
    };
    tracing::debug!(path = %path.display(), %format, rows = rows.len(), "rows read");
    Ok(rows)
}
