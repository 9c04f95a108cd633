//! Conversion between rows and a header-keyed mapping of columns.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::normalize::stringify_row;
use crate::table::Table;
use crate::Row;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Header name to the column's values, one per data row, in header order.
pub type Mapping = IndexMap<String, Vec<String>>;

/// How imported rows are combined with the rows already in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMethod {
    /// Add the rows after the existing ones
    Append,
    /// Insert the rows as a block starting at the given index
    Insert,
    /// Drop the existing rows first
    Overwrite,
}

impl ImportMethod {
    pub const NAMES: [&'static str; 3] = ["append", "insert", "overwrite"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMethod::Append => "append",
            ImportMethod::Insert => "insert",
            ImportMethod::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for ImportMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportMethod {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "append" => Ok(ImportMethod::Append),
            "insert" => Ok(ImportMethod::Insert),
            "overwrite" => Ok(ImportMethod::Overwrite),
            _ => Err(Error::UnsupportedOperation {
                method: s.trim().to_string(),
            }),
        }
    }
}

impl Table {
    /// Maps each header cell of row 0 to that column's cells in the rows below.
    ///
    /// Rows too short to have a cell for a column are skipped for that
    /// column rather than padded. A repeated header name keeps its first
    /// position and takes the values of its last column.
    pub fn export_mapping(&self) -> Mapping {
        let rows = self.stored_rows();
        let Some((header, data)) = rows.split_first() else {
            return Mapping::new();
        };

        header
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let values = data.iter().filter_map(|row| row.get(i).cloned()).collect();
                (key.clone(), values)
            })
            .collect()
    }

    /// Adds the keys of `mapping` as a header row and its transposed values
    /// as data rows, combined with the current rows according to `method`.
    ///
    /// `index` is only used by [`ImportMethod::Insert`]. Value sequences of
    /// unequal length are cut to the shortest one.
    pub fn import_mapping<M, K, V>(
        &mut self,
        mapping: M,
        method: ImportMethod,
        index: usize,
    ) -> Result<()>
    where
        M: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<Cell>,
    {
        let rows = self.mapping_rows(mapping);
        tracing::debug!(%method, index, rows = rows.len(), "importing mapping");

        match method {
            ImportMethod::Append => self.add_rows(rows),
            ImportMethod::Insert => {
                if index > self.len() {
                    return Err(Error::index("insert", index, self.len()));
                }
                for (offset, row) in rows.into_iter().enumerate() {
                    self.insert_row(index + offset, row)?;
                }
            }
            ImportMethod::Overwrite => self.replace_all_rows(rows),
        }
        Ok(())
    }

    fn mapping_rows<M, K, V>(&self, mapping: M) -> Vec<Row>
    where
        M: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<Cell>,
    {
        let empty = self.style().empty.clone();
        let (header, columns): (Vec<String>, Vec<Vec<V>>) = mapping
            .into_iter()
            .map(|(key, values)| (key.into(), values))
            .unzip();

        let depth = columns.iter().map(Vec::len).min().unwrap_or(0);
        let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();

        let mut rows = Vec::with_capacity(depth + 1);
        rows.push(header);
        for _ in 0..depth {
            let cells = columns.iter_mut().filter_map(|column| column.next());
            rows.push(stringify_row(cells, &empty));
        }
        rows
    }
}
