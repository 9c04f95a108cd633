use std::fmt;

/// Result type for mktable-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while editing or rendering a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A row index was outside the valid range for the operation
    Index {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    /// There was nothing to measure or render
    EmptyInput(String),

    /// Unknown import method name
    UnsupportedOperation { method: String },
}

impl Error {
    pub(crate) fn index(operation: &'static str, index: usize, len: usize) -> Self {
        Error::Index {
            operation,
            index,
            len,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Index {
                operation,
                index,
                len,
            } => write!(
                f,
                "Index error: cannot {} row at index {} (table has {} rows)",
                operation, index, len
            ),
            Error::EmptyInput(msg) => write!(f, "Empty input: {}", msg),
            Error::UnsupportedOperation { method } => write!(
                f,
                "Unsupported import method '{}' (available methods: {})",
                method,
                crate::mapping::ImportMethod::NAMES.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {}
