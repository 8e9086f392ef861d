//! Sort key extraction errors

/// Error raised when a cell's text cannot be turned into a sort key.
///
/// Carries the row and column of the offending cell so the caller can point
/// at it in the source table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyError {
    /// A number column holds text that is not a number after stripping.
    #[error("Row {row}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },

    /// A date column holds text that matches none of the configured formats.
    #[error("Row {row}, column {column}: '{value}' is not a recognized date")]
    InvalidDate {
        row: usize,
        column: usize,
        value: String,
    },
}

impl KeyError {
    /// Creates a new invalid number error.
    pub fn invalid_number(row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            row,
            column,
            value: value.into(),
        }
    }

    /// Creates a new invalid date error.
    pub fn invalid_date(row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            row,
            column,
            value: value.into(),
        }
    }
}
