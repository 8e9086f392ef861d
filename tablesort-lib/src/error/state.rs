//! Sort state errors

/// Error raised when persisted or requested sort state cannot be applied.
///
/// The affected table is always left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The state string is not `<column><a|d>`.
    #[error("Invalid state string '{state}'")]
    InvalidState { state: String },

    /// A `t:` key names a table that was never registered.
    #[error("Invalid table ID [{table}]")]
    UnknownTable { table: String },

    /// The column index does not exist in the table.
    #[error("Column {column} out of range (table has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },
}

impl StateError {
    /// Creates a new invalid state error.
    pub fn invalid_state(state: impl Into<String>) -> Self {
        Self::InvalidState {
            state: state.into(),
        }
    }

    /// Creates a new unknown table error.
    pub fn unknown_table(table: impl Into<String>) -> Self {
        Self::UnknownTable {
            table: table.into(),
        }
    }
}
