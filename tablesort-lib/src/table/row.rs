//! Table rows and table sources.

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::key::ColumnType;
use crate::key::SortKeyRegistry;

use super::TableSortState;

/// Trait for rows that can be sorted by a [`TableSortState`].
///
/// Rows are only ever read and reordered, never created or changed.
///
/// # Example
///
/// ```
/// use tablesort_lib::table::TableRow;
///
/// struct Holiday {
///     name: String,
///     date: String,
/// }
///
/// impl TableRow for Holiday {
///     fn cell_count(&self) -> usize {
///         2
///     }
///
///     fn cell_text(&self, column: usize) -> Option<&str> {
///         match column {
///             0 => Some(&self.name),
///             1 => Some(&self.date),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Number of cells in this row.
    fn cell_count(&self) -> usize;

    /// Text content of the cell at `column`.
    fn cell_text(&self, column: usize) -> Option<&str>;
}

impl<S: AsRef<str>> TableRow for Vec<S> {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> TableRow for [S; N] {
    fn cell_count(&self) -> usize {
        N
    }

    fn cell_text(&self, column: usize) -> Option<&str> {
        self.get(column).map(AsRef::as_ref)
    }
}

/// A table as read from a page: header cells, per-column type
/// declarations and body rows of cell text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSource {
    /// Table identifier, used in URL hash keys.
    pub id: String,
    /// Header cell text, one per column.
    pub headers: Vec<String>,
    /// Column type tokens, one per column.
    #[serde(default)]
    pub column_types: Vec<String>,
    /// Body rows.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl TableSource {
    /// Creates a table source.
    pub fn new(id: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            id: id.into(),
            headers,
            column_types: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Sets the column type tokens.
    pub fn with_column_types<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_types = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a body row.
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Resolves the column type declarations.
    pub fn resolve_column_types(
        &self,
        registry: &SortKeyRegistry,
    ) -> Result<Vec<ColumnType>, ConfigError> {
        if self.column_types.is_empty() && !self.headers.is_empty() {
            return Err(ConfigError::missing_column_types(&self.id));
        }
        if self.column_types.len() != self.headers.len() {
            return Err(ConfigError::ColumnCountMismatch {
                expected: self.headers.len(),
                actual: self.column_types.len(),
            });
        }

        self.column_types
            .iter()
            .enumerate()
            .map(|(column, token)| registry.resolve(column, token))
            .collect()
    }

    /// Builds the sort state for this table, consuming its rows.
    pub fn into_state(
        self,
        registry: &SortKeyRegistry,
    ) -> Result<TableSortState<Vec<String>>, ConfigError> {
        let column_types = self.resolve_column_types(registry)?;
        TableSortState::new(self.rows, column_types, registry)
    }
}
