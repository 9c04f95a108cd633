use crate::columns::{Columns, cell_widths, max_widths};
use crate::error::{Error, Result};
use crate::style::TableStyle;
use crate::table::Table;
use std::fmt;
use std::ops::Index;

/// Lines of a rendered table, top border first.
///
/// Owns its lines, so it can be iterated any number of times and indexed.
/// `Display` writes every line followed by a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    lines: Vec<String>,
}

impl Rendered {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Index<usize> for Rendered {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl IntoIterator for Rendered {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rendered {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Table {
    /// Draws the table: border, header row, border, data rows, border.
    pub fn render(&self) -> Result<Rendered> {
        let rows = self.fill_rows_gaps(None)?;
        let widths = max_widths(
            Columns::new(rows.clone())
                .map(|column| cell_widths(&column))
                .collect(),
        );
        if widths.is_empty() {
            return Err(Error::EmptyInput("the rows have no cells".to_string()));
        }

        let style = self.style();
        let mut formatted = rows.iter().map(|row| format_row(row, &widths, style));
        // fill_rows_gaps guarantees at least one row
        let header = formatted.next().unwrap_or_default();
        let border = border_line(&header, style);

        let mut lines = Vec::with_capacity(rows.len() + 3);
        lines.push(border.clone());
        lines.push(header);
        lines.push(border.clone());
        lines.extend(formatted);
        lines.push(border);

        tracing::trace!(lines = lines.len(), columns = widths.len(), "table rendered");
        Ok(Rendered { lines })
    }

    /// The rendered table as one string, each line ending in a newline.
    pub fn to_display_string(&self) -> Result<String> {
        Ok(self.render()?.to_string())
    }
}

/// `| cell   | cell |`: one space either side, padded to the column width.
fn format_row(row: &[String], widths: &[usize], style: &TableStyle) -> String {
    let mut line = String::new();
    for (cell, width) in row.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push(style.vertical);
        line.push(' ');
        line.push_str(cell);
        line.extend(std::iter::repeat_n(' ', pad));
        line.push(' ');
    }
    line.push(style.vertical);
    line
}

/// Mirrors `row`: separators turn into junctions, everything else into fill.
fn border_line(row: &str, style: &TableStyle) -> String {
    row.chars()
        .map(|ch| {
            if ch == style.vertical {
                style.junction
            } else {
                style.horizontal
            }
        })
        .collect()
}
