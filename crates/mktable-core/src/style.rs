use serde::{Deserialize, Serialize};

/// Glyphs and placeholder text used when drawing a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Column separator, drawn on both sides of every cell
    pub vertical: char,
    /// Fill character of border lines
    pub horizontal: char,
    /// Border character where a column separator meets a border line
    pub junction: char,
    /// Text used for missing and null cells
    pub empty: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            vertical: '|',
            horizontal: '-',
            junction: '+',
            empty: String::new(),
        }
    }
}

impl TableStyle {
    pub fn with_vertical(mut self, vertical: char) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_horizontal(mut self, horizontal: char) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_junction(mut self, junction: char) -> Self {
        self.junction = junction;
        self
    }

    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }
}
