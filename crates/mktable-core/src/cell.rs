use serde::{Deserialize, Serialize};
use std::fmt;

/// A value supplied for one table cell, before it is turned into text.
///
/// Cells are stringified as soon as they enter a [`Table`](crate::Table), so
/// this type only lives at the edges: construction, imports and JSON input.
/// Serialized untagged, which makes a JSON `null`, boolean, number, string or
/// array deserialize into the matching variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<Cell>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Display text of this cell; `Null` (also inside lists) becomes `empty`.
    pub fn render(&self, empty: &str) -> String {
        match self {
            Cell::Null => empty.to_string(),
            Cell::Bool(value) => value.to_string(),
            Cell::Int(value) => value.to_string(),
            Cell::UInt(value) => value.to_string(),
            Cell::Float(value) => value.to_string(),
            Cell::Text(text) => text.clone(),
            Cell::List(items) => {
                let inner = items
                    .iter()
                    .map(|item| item.render(empty))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}]", inner)
            }
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_int!(Int => i8, i16, i32, i64);
impl_from_int!(UInt => u8, u16, u32, u64);

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::UInt(value as u64)
    }
}

impl From<isize> for Cell {
    fn from(value: isize) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<f32> for Cell {
    fn from(value: f32) -> Self {
        Cell::Float(f64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::Text(value.clone())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Cell {
    fn from(values: Vec<T>) -> Self {
        Cell::List(values.into_iter().map(Into::into).collect())
    }
}

/// Builds a `Vec<Cell>` from expressions of mixed types.
///
/// ```
/// use mktable_core::{row, Cell};
///
/// let row = row![1, "Alice", None::<i64>, true];
/// assert_eq!(row[2], Cell::Null);
/// ```
#[macro_export]
macro_rules! row {
    ($($cell:expr),* $(,)?) => {
        vec![$($crate::Cell::from($cell)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_render_as_text() {
        assert_eq!(Cell::from(42).render(""), "42");
        assert_eq!(Cell::from(999.99).render(""), "999.99");
        assert_eq!(Cell::from(12.5).render(""), "12.5");
        assert_eq!(Cell::from(true).render(""), "true");
        assert_eq!(Cell::from("Alice").render(""), "Alice");
    }

    #[test]
    fn test_whole_float_has_no_fraction() {
        assert_eq!(Cell::from(1.0).render(""), "1");
        assert_eq!(Cell::from(12.0).render(""), "12");
        assert_eq!(Cell::from(-0.5).render(""), "-0.5");
    }

    #[test]
    fn test_null_uses_empty_marker() {
        assert_eq!(Cell::Null.render(""), "");
        assert_eq!(Cell::Null.render("n/a"), "n/a");
        assert_eq!(Cell::from(None::<&str>).render("-"), "-");
        assert!(Cell::from(None::<i32>).is_null());
        assert!(!Cell::from("").is_null());
    }

    #[test]
    fn test_list_renders_bracketed() {
        let cell = Cell::from(vec!["electronics", "work"]);
        assert_eq!(cell.render(""), "[electronics, work]");

        let nested = row![1, vec![Cell::Null, Cell::from(2)]];
        assert_eq!(nested[1].render("?"), "[?, 2]");
    }

    #[test]
    fn test_deserialize_untagged_json() {
        let cells: Vec<Cell> =
            serde_json::from_str(r#"[null, true, -3, 4.5, "x", [1, "y"]]"#).unwrap();

        assert_eq!(
            cells,
            vec![
                Cell::Null,
                Cell::Bool(true),
                Cell::Int(-3),
                Cell::Float(4.5),
                Cell::Text("x".to_string()),
                Cell::List(vec![Cell::Int(1), Cell::Text("y".to_string())]),
            ]
        );
    }
}
