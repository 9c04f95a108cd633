//! Cell stringification and gap filling.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::Row;

/// Turns a sequence of cell values into a stored row.
pub fn stringify_row<R, C>(row: R, empty: &str) -> Row
where
    R: IntoIterator<Item = C>,
    C: Into<Cell>,
{
    row.into_iter().map(|cell| cell.into().render(empty)).collect()
}

/// Pads every row on the right with `empty` up to the longest row's length.
///
/// Works on the rows it is given and never touches table storage. Fails when
/// `rows` is empty because there is no longest row.
pub fn fill_gaps(mut rows: Vec<Row>, empty: &str) -> Result<Vec<Row>> {
    let max_len = rows
        .iter()
        .map(Vec::len)
        .max()
        .ok_or_else(|| Error::EmptyInput("the rows are empty".to_string()))?;

    for row in &mut rows {
        let missing = max_len - row.len();
        row.extend(std::iter::repeat_n(empty.to_string(), missing));
    }

    Ok(rows)
}
