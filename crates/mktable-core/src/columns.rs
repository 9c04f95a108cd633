//! Column-major views of a table and the widths derived from them.

use crate::table::Table;
use crate::Row;

/// Lazily transposes gap-filled rows, yielding one column at a time.
#[derive(Debug, Clone)]
pub struct Columns {
    rows: Vec<Row>,
    width: usize,
    next: usize,
}

impl Columns {
    /// `rows` must already share one length.
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        Self {
            rows,
            width,
            next: 0,
        }
    }
}

impl Iterator for Columns {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.width {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Columns {}

/// Lazily transposes rows as stored; short rows show up as `None`.
#[derive(Debug, Clone)]
pub struct RawColumns {
    rows: Vec<Row>,
    width: usize,
    next: usize,
}

impl Iterator for RawColumns {
    type Item = Vec<Option<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.width {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.rows.iter().map(|row| row.get(index).cloned()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RawColumns {}

impl Table {
    /// Columns of the gap-filled rows. Empty when the table has no rows.
    pub fn columns(&self) -> Columns {
        Columns::new(self.fill_rows_gaps(None).unwrap_or_default())
    }

    /// Columns of the rows exactly as stored, without gap filling.
    pub fn raw_columns(&self) -> RawColumns {
        let rows = self.rows();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        RawColumns {
            rows,
            width,
            next: 0,
        }
    }

    /// Character count of every cell, grouped by column.
    pub fn column_widths(&self) -> Vec<Vec<usize>> {
        self.columns().map(|column| cell_widths(&column)).collect()
    }

    /// Widest cell of each column.
    pub fn max_column_widths(&self) -> Vec<usize> {
        max_widths(self.column_widths())
    }
}

pub(crate) fn cell_widths(column: &[String]) -> Vec<usize> {
    column.iter().map(|cell| cell.chars().count()).collect()
}

pub(crate) fn max_widths(widths: Vec<Vec<usize>>) -> Vec<usize> {
    widths
        .into_iter()
        .map(|column| column.into_iter().max().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn people() -> Table {
        Table::from_rows([
            row!["ID", "Name", "Age"],
            row![1, "Alice", 23],
            row![2, "Bob", 30],
            row![3, "Charlie", 18],
        ])
    }

    #[test]
    fn test_columns_transpose_rows() {
        let columns: Vec<_> = people().columns().collect();

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[1], vec!["Name", "Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_columns_are_gap_filled() {
        let mut table = Table::from_rows([["First Name", "Last Name"]]);
        table.add_row(["Behrad"]);

        let columns: Vec<_> = table.columns().collect();
        assert_eq!(columns[1], vec!["Last Name", ""]);
    }

    #[test]
    fn test_raw_columns_keep_gaps() {
        let mut table = Table::from_rows([["First Name", "Last Name"]]);
        table.add_row(["Behrad"]);

        let columns: Vec<_> = table.raw_columns().collect();
        assert_eq!(columns[1], vec![Some("Last Name".to_string()), None]);
    }

    #[test]
    fn test_columns_of_empty_table() {
        assert_eq!(Table::new().columns().len(), 0);
        assert_eq!(Table::new().raw_columns().count(), 0);
    }

    #[test]
    fn test_column_widths_per_cell() {
        assert_eq!(
            people().column_widths(),
            vec![vec![2, 1, 1, 1], vec![4, 5, 3, 7], vec![3, 2, 2, 2]]
        );
    }

    #[test]
    fn test_max_column_widths() {
        assert_eq!(people().max_column_widths(), vec![2, 7, 3]);
    }

    #[test]
    fn test_widths_count_characters_not_bytes() {
        let table = Table::from_rows([["héllo", "日本"]]);
        assert_eq!(table.max_column_widths(), vec![5, 2]);
    }
}
