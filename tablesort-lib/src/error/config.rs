//! Table configuration errors

use super::KeyError;

/// Error raised while setting up a sortable table.
///
/// Every variant is fatal for the table being initialized. Nothing is
/// deferred to sort time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A column declared a type token outside the four known ones.
    #[error("Invalid column type '{token}' for column {column}")]
    UnknownColumnType { column: usize, token: String },

    /// The table has no column type declarations at all.
    #[error("Table '{table}' has no column type declarations")]
    MissingColumnTypes { table: String },

    /// The number of column types differs from the number of header cells.
    #[error("Expected {expected} column types, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    /// A body row has a different number of cells than there are columns.
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell could not be converted to a sort key.
    #[error(transparent)]
    Key(#[from] KeyError),
}

impl ConfigError {
    /// Creates a new unknown column type error.
    pub fn unknown_column_type(column: usize, token: impl Into<String>) -> Self {
        Self::UnknownColumnType {
            column,
            token: token.into(),
        }
    }

    /// Creates a new missing column types error.
    pub fn missing_column_types(table: impl Into<String>) -> Self {
        Self::MissingColumnTypes {
            table: table.into(),
        }
    }
}
