//! Bordered ASCII tables for the terminal.
//!
//! A [`Table`] stores rows of text. Values go in as anything convertible to
//! a [`Cell`] and are turned into text on entry. Rendering pads short rows,
//! measures every column and draws the grid:
//!
//! ```
//! use mktable_core::{row, Table};
//!
//! let table = Table::from_rows([
//!     row!["ID", "Name"],
//!     row![1, "Alice"],
//!     row![2, None::<&str>],
//! ]);
//!
//! assert_eq!(
//!     table.to_display_string().unwrap(),
//!     "+----+-------+\n\
//!      | ID | Name  |\n\
//!      +----+-------+\n\
//!      | 1  | Alice |\n\
//!      | 2  |       |\n\
//!      +----+-------+\n"
//! );
//! ```
//!
//! Tables also convert to and from a [`Mapping`] of header names to column
//! values, see [`Table::export_mapping`] and [`Table::import_mapping`].

pub mod cell;
pub mod columns;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod render;
pub mod style;
pub mod table;

pub use cell::Cell;
pub use columns::{Columns, RawColumns};
pub use error::{Error, Result};
pub use mapping::{ImportMethod, Mapping};
pub use render::Rendered;
pub use style::TableStyle;
pub use table::Table;

/// One stored row: the display text of each cell.
pub type Row = Vec<String>;
