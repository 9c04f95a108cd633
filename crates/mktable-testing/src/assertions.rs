//! Structural assertions on rendered tables.

use anyhow::{Context, Result};
use mktable_core::{Rendered, Table, TableStyle};

/// Assert that every line has the same width and that column separators in
/// content lines sit exactly under the junctions of the border lines.
///
/// Expects the layout `border, header, border, rows.., border` and cells that
/// do not contain the separator glyph themselves.
pub fn assert_border_alignment(rendered: &Rendered, style: &TableStyle) -> Result<()> {
    let lines: Vec<Vec<char>> = rendered.iter().map(|line| line.chars().collect()).collect();
    let border = lines.first().context("Rendered table has no lines")?;

    for (i, line) in lines.iter().enumerate() {
        if line.len() != border.len() {
            anyhow::bail!(
                "Line {} is {} characters wide, expected {}",
                i,
                line.len(),
                border.len()
            );
        }
    }

    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        let is_border = i == 0 || i == 2 || i == last;
        for (col, (&ch, &edge)) in line.iter().zip(border.iter()).enumerate() {
            let at_junction = edge == style.junction;
            let ok = if is_border {
                ch == edge
            } else {
                (ch == style.vertical) == at_junction
            };
            if !ok {
                anyhow::bail!("Line {} column {}: unexpected '{}'", i, col, ch);
            }
        }
    }

    Ok(())
}

/// Assert that each column's maximum covers every gap-filled cell in it.
pub fn assert_widths_cover_cells(table: &Table) -> Result<()> {
    let widths = table.max_column_widths();
    let rows = table.fill_rows_gaps(None)?;

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let width = widths
                .get(c)
                .with_context(|| format!("No width for column {}", c))?;
            if cell.chars().count() > *width {
                anyhow::bail!(
                    "Cell ({}, {}) '{}' is wider than its column width {}",
                    r,
                    c,
                    cell,
                    width
                );
            }
        }
    }

    Ok(())
}
