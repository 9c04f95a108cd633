//! Sample datasets and input files.
//!
//! Each [`Dataset`] pairs rows of mixed values with the exact text the
//! default style renders for them.

use anyhow::Result;
use mktable_core::{Cell, Table, row};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rows of cell values plus their expected default rendering.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
    pub expected: &'static str,
}

impl Dataset {
    pub fn table(&self) -> Table {
        Table::from_rows(self.rows.clone())
    }

    /// Every dataset in this module.
    pub fn all() -> Vec<Dataset> {
        vec![simple(), mixed(), missing(), numeric(), edge_cases()]
    }
}

pub fn simple() -> Dataset {
    Dataset {
        name: "simple",
        rows: vec![
            row!["ID", "Name", "Age"],
            row![1, "Alice", 23],
            row![2, "Bob", 30],
            row![3, "Charlie", 18],
        ],
        expected: "\
+----+---------+-----+
| ID | Name    | Age |
+----+---------+-----+
| 1  | Alice   | 23  |
| 2  | Bob     | 30  |
| 3  | Charlie | 18  |
+----+---------+-----+
",
    }
}

pub fn mixed() -> Dataset {
    Dataset {
        name: "mixed",
        rows: vec![
            row!["Product", "Price", "InStock", "Tags"],
            row!["Laptop", 999.99, true, vec!["electronics", "work"]],
            row!["Phone", 499.49, false, vec!["electronics"]],
            row!["Book", 12.5, true, vec!["education", "fun"]],
        ],
        expected: "\
+---------+--------+---------+---------------------+
| Product | Price  | InStock | Tags                |
+---------+--------+---------+---------------------+
| Laptop  | 999.99 | true    | [electronics, work] |
| Phone   | 499.49 | false   | [electronics]       |
| Book    | 12.5   | true    | [education, fun]    |
+---------+--------+---------+---------------------+
",
    }
}

pub fn missing() -> Dataset {
    Dataset {
        name: "missing",
        rows: vec![
            row!["ID", "Name", "Score"],
            row![1, "Alice", 95],
            row![2, None::<&str>, 88],
            row![3, "Charlie", None::<i64>],
        ],
        expected: "\
+----+---------+-------+
| ID | Name    | Score |
+----+---------+-------+
| 1  | Alice   | 95    |
| 2  |         | 88    |
| 3  | Charlie |       |
+----+---------+-------+
",
    }
}

pub fn numeric() -> Dataset {
    Dataset {
        name: "numeric",
        rows: vec![
            row!["ID", "Value"],
            row![1, 10],
            row![2, 50],
            row![3, 30],
            row![4, 70],
            row![5, 20],
        ],
        expected: "\
+----+-------+
| ID | Value |
+----+-------+
| 1  | 10    |
| 2  | 50    |
| 3  | 30    |
| 4  | 70    |
| 5  | 20    |
+----+-------+
",
    }
}

/// Duplicate and null keys.
pub fn edge_cases() -> Dataset {
    Dataset {
        name: "edge_cases",
        rows: vec![
            row!["Key", "Value"],
            row![1, "A"],
            row![1, "B"],
            row![None::<i64>, "C"],
        ],
        expected: "\
+-----+-------+
| Key | Value |
+-----+-------+
| 1   | A     |
| 1   | B     |
|     | C     |
+-----+-------+
",
    }
}

/// Input files written into a temporary directory that lives as long as this value.
pub struct InputFiles {
    dir: TempDir,
}

impl InputFiles {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` as-is and returns the file path.
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Writes semicolon-separated lines, one per row.
    pub fn write_lines(&self, name: &str, rows: &[&[&str]]) -> Result<PathBuf> {
        let content: String = rows
            .iter()
            .map(|row| format!("{}\n", row.join(";")))
            .collect();
        self.write(name, &content)
    }

    /// Writes `value` as pretty JSON. Object keys keep the order they were
    /// built in.
    pub fn write_json(&self, name: &str, value: &serde_json::Value) -> Result<PathBuf> {
        self.write(name, &serde_json::to_string_pretty(value)?)
    }
}
