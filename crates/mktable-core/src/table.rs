use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::normalize::{fill_gaps, stringify_row};
use crate::style::TableStyle;
use crate::Row;

/// Ordered rows of text cells plus the style used to draw them.
///
/// Row 0 is treated as the header when rendering and when converting to or
/// from a [`Mapping`](crate::Mapping); storage itself does not special-case it.
/// Every accessor hands out copies, so callers cannot reach the stored rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    style: TableStyle,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: TableStyle) -> Self {
        Self {
            rows: Vec::new(),
            style,
        }
    }

    /// Builds a table with the default style from rows of cell values.
    pub fn from_rows<I, R, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut table = Self::new();
        table.add_rows(rows);
        table
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Glyph changes apply to the next render. The empty marker only affects
    /// cells added afterwards and gap filling, since stored cells are already text.
    pub fn style_mut(&mut self) -> &mut TableStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: TableStyle) {
        self.style = style;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row<R, C>(&mut self, row: R)
    where
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let row = self.stringify(row);
        self.rows.push(row);
    }

    pub fn add_rows<I, R, C>(&mut self, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let before = self.rows.len();
        for row in rows {
            self.add_row(row);
        }
        tracing::trace!(added = self.rows.len() - before, total = self.rows.len(), "rows added");
    }

    /// Inserts `row` before the row currently at `index`; `index == len()` appends.
    pub fn insert_row<R, C>(&mut self, index: usize, row: R) -> Result<()>
    where
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        if index > self.rows.len() {
            return Err(Error::index("insert", index, self.rows.len()));
        }
        let row = self.stringify(row);
        self.rows.insert(index, row);
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        self.remove_rows(&[index])
    }

    /// Removes every row listed in `indices`.
    ///
    /// Indices refer to positions before the call. All of them are checked
    /// first, so either every row goes or nothing changes. Repeated indices
    /// remove their row once.
    pub fn remove_rows(&mut self, indices: &[usize]) -> Result<()> {
        let len = self.rows.len();
        if let Some(&bad) = indices.iter().find(|&&index| index >= len) {
            return Err(Error::index("remove", bad, len));
        }

        let mut ordered = indices.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));
        ordered.dedup();

        for index in &ordered {
            self.rows.remove(*index);
        }
        tracing::debug!(removed = ordered.len(), remaining = self.rows.len(), "rows removed");
        Ok(())
    }

    /// Moves the row at `old_index` so it ends up at `new_index`.
    ///
    /// `new_index` is a position in the table after the row has been taken
    /// out, so it must be smaller than `len()`.
    pub fn move_row(&mut self, old_index: usize, new_index: usize) -> Result<()> {
        let len = self.rows.len();
        if old_index >= len {
            return Err(Error::index("move", old_index, len));
        }
        if new_index >= len {
            return Err(Error::index("move", new_index, len));
        }

        let row = self.rows.remove(old_index);
        self.rows.insert(new_index, row);
        Ok(())
    }

    /// Independent copy of every stored row.
    pub fn rows(&self) -> Vec<Row> {
        self.rows.clone()
    }

    /// Number of cells in each stored row, before any gap filling.
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Drops every stored row and installs `rows` instead.
    pub fn replace_all_rows<I, R, C>(&mut self, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let empty = self.style.empty.clone();
        self.rows = rows
            .into_iter()
            .map(|row| stringify_row(row, &empty))
            .collect();
        tracing::debug!(total = self.rows.len(), "rows replaced");
    }

    /// Gap-filled copy of `rows`, or of the stored rows when `rows` is `None`.
    pub fn fill_rows_gaps(&self, rows: Option<Vec<Row>>) -> Result<Vec<Row>> {
        let rows = rows.unwrap_or_else(|| self.rows());
        fill_gaps(rows, &self.style.empty)
    }

    pub(crate) fn stored_rows(&self) -> &[Row] {
        &self.rows
    }

    fn stringify<R, C>(&self, row: R) -> Row
    where
        R: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        stringify_row(row, &self.style.empty)
    }
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

    fn names(table: &Table) -> Vec<String> {
        table.rows().into_iter().map(|row| row[1].clone()).collect()
    }

    #[test]
    fn test_construct_stringifies_cells() {
        let table = people();

        assert_eq!(table.len(), 4);
        assert_eq!(table.rows()[1], vec!["1", "Alice", "23"]);
    }

    #[test]
    fn test_construct_with_style_uses_empty_marker() {
        let mut table = Table::with_style(TableStyle::default().with_empty("-"));
        table.add_row(row!["x", None::<i32>]);

        assert_eq!(table.rows(), vec![vec!["x", "-"]]);
    }

    #[test]
    fn test_add_rows_appends_in_order() {
        let mut table = people();
        table.add_rows([["4", "Alex", "20"], ["5", "Jack", "30"]]);

        assert_eq!(table.len(), 6);
        assert_eq!(table.rows()[5], vec!["5", "Jack", "30"]);
    }

    #[test]
    fn test_insert_row_shifts_following_rows() {
        let mut table = people();
        table.insert_row(1, row![0, "Zed", 99]).unwrap();

        assert_eq!(names(&table), vec!["Name", "Zed", "Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_insert_row_at_end_appends() {
        let mut table = people();
        table.insert_row(4, row![4, "Dana", 41]).unwrap();

        assert_eq!(names(&table).last().unwrap(), "Dana");
    }

    #[test]
    fn test_insert_row_out_of_range() {
        let mut table = people();
        let err = table.insert_row(5, row!["x"]).unwrap_err();

        assert_eq!(err, Error::index("insert", 5, 4));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_remove_rows_uses_original_indices() {
        let mut table = Table::from_rows([["a"], ["b"], ["c"]]);
        table.remove_rows(&[0, 2]).unwrap();

        assert_eq!(table.rows(), vec![vec!["b"]]);
    }

    #[test]
    fn test_remove_rows_ignores_duplicates() {
        let mut table = Table::from_rows([["a"], ["b"], ["c"]]);
        table.remove_rows(&[1, 1]).unwrap();

        assert_eq!(table.rows(), vec![vec!["a"], vec!["c"]]);
    }

    #[test]
    fn test_remove_rows_is_all_or_nothing() {
        let mut table = people();
        let err = table.remove_rows(&[1, 9]).unwrap_err();

        assert_eq!(err, Error::index("remove", 9, 4));
        assert_eq!(table, people());
    }

    #[test]
    fn test_move_row_forward_and_back() {
        let mut table = people();

        table.move_row(1, 3).unwrap();
        assert_eq!(names(&table), vec!["Name", "Bob", "Charlie", "Alice"]);

        table.move_row(3, 0).unwrap();
        assert_eq!(names(&table), vec!["Alice", "Name", "Bob", "Charlie"]);
    }

    #[test]
    fn test_move_row_rejects_bad_indices() {
        let mut table = people();

        assert_eq!(table.move_row(4, 0), Err(Error::index("move", 4, 4)));
        assert_eq!(table.move_row(0, 4), Err(Error::index("move", 4, 4)));
        assert_eq!(table, people());
    }

    #[test]
    fn test_rows_returns_independent_copy() {
        let table = people();
        let mut copy = table.rows();
        copy[1][1] = "Mallory".to_string();
        copy.clear();

        assert_eq!(table.rows()[1][1], "Alice");
    }

    #[test]
    fn test_replace_all_rows() {
        let mut table = people();
        table.replace_all_rows([row!["k", "v"], row![1, None::<&str>]]);

        assert_eq!(table.rows(), vec![vec!["k", "v"], vec!["1", ""]]);
    }

    #[test]
    fn test_fill_rows_gaps_leaves_storage_untouched() {
        let mut table = Table::from_rows([["First Name", "Last Name"], ["Hirad", "Jahangirfard"]]);
        table.add_row(["Behrad"]);

        let filled = table.fill_rows_gaps(None).unwrap();

        assert_eq!(filled[2], vec!["Behrad", ""]);
        assert_eq!(table.row_lengths(), vec![2, 2, 1]);
    }

    #[test]
    fn test_fill_rows_gaps_on_given_rows() {
        let table = Table::with_style(TableStyle::default().with_empty("?"));
        let filled = table
            .fill_rows_gaps(Some(vec![vec!["a".into(), "b".into()], vec![]]))
            .unwrap();

        assert_eq!(filled[1], vec!["?", "?"]);
    }
}
