//! Column permutations.

use log::debug;

use crate::error::KeyError;
use crate::key::ColumnType;
use crate::key::SortKey;
use crate::key::SortKeyRegistry;

use super::TableRow;

/// Row indices `[0, n)` in ascending key order for one column.
///
/// Built with a stable sort on `(key, original index)`, so rows with equal
/// keys keep their original relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Builds the ascending permutation of a sequence of keys.
    pub fn from_keys(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut pairs: Vec<(SortKey, usize)> = keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| (key, index))
            .collect();

        pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        Self(pairs.into_iter().map(|(_, index)| index).collect())
    }

    /// Returns the row indices in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of rows covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates row indices in the given direction.
    pub fn walk(&self, ascending: bool) -> Box<dyn Iterator<Item = usize> + '_> {
        if ascending {
            Box::new(self.0.iter().copied())
        } else {
            Box::new(self.0.iter().rev().copied())
        }
    }

    /// Returns true if this is a bijection on `[0, n)`.
    pub fn is_bijection(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &index in &self.0 {
            if index >= n || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }
}

/// Builds the permutation of one column.
pub(crate) fn column_permutation<R: TableRow>(
    rows: &[R],
    column: usize,
    column_type: ColumnType,
    registry: &SortKeyRegistry,
) -> Result<Permutation, KeyError> {
    let key_fn = registry.key_fn(column_type);
    let keys = rows
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let text = cells.cell_text(column).unwrap_or_default();
            key_fn(text).ok_or_else(|| match column_type {
                ColumnType::Date => KeyError::invalid_date(row, column, text),
                _ => KeyError::invalid_number(row, column, text),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Permutation::from_keys(keys))
}

/// Builds the permutations of every column, eagerly.
pub(crate) fn all_permutations<R: TableRow>(
    rows: &[R],
    column_types: &[ColumnType],
    registry: &SortKeyRegistry,
) -> Result<Vec<Permutation>, KeyError> {
    debug!(
        "Building permutations for {} rows x {} columns",
        rows.len(),
        column_types.len()
    );

    column_types
        .iter()
        .enumerate()
        .map(|(column, &column_type)| column_permutation(rows, column, column_type, registry))
        .collect()
}
