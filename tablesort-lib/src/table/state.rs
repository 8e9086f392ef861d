//! Table sort state.

use log::debug;

use crate::error::ConfigError;
use crate::error::StateError;
use crate::key::ColumnType;
use crate::key::SortKeyRegistry;

use super::Direction;
use super::Permutation;
use super::TableRow;
use super::permutation::all_permutations;

/// Sort state of one table.
///
/// Holds the rows in their original order, one precomputed permutation per
/// column, and the active sort (column and direction), if any. Permutations
/// depend only on the rows, so they survive every state change.
///
/// # Example
///
/// ```
/// use tablesort_lib::key::{ColumnType, SortKeyRegistry};
/// use tablesort_lib::table::TableSortState;
///
/// let rows = vec![["pear", "$3"], ["apple", "NA"], ["fig", "$12"]];
/// let registry = SortKeyRegistry::default();
/// let mut state = TableSortState::new(
///     rows,
///     vec![ColumnType::CaseInsensitive, ColumnType::Number],
///     &registry,
/// )
/// .unwrap();
///
/// state.do_click(1).unwrap();
/// assert_eq!(state.encode(), "1d");
/// assert_eq!(state.order(), vec![2, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct TableSortState<R> {
    /// Rows in the order first observed.
    rows: Vec<R>,
    /// Declared type of each column.
    column_types: Vec<ColumnType>,
    /// Ascending permutation per column.
    permutations: Vec<Permutation>,
    /// Active sort column and direction. `None` shows the original order.
    sort: Option<(usize, Direction)>,
    /// Direction applied when a new column is clicked.
    first_click: Direction,
}

impl<R: TableRow> TableSortState<R> {
    /// Snapshots `rows` and builds every column's permutation.
    ///
    /// Fails if a row has the wrong number of cells or a cell cannot be
    /// converted to its column's key.
    pub fn new(
        rows: Vec<R>,
        column_types: Vec<ColumnType>,
        registry: &SortKeyRegistry,
    ) -> Result<Self, ConfigError> {
        let expected = column_types.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.cell_count() != expected)
        {
            return Err(ConfigError::RaggedRow {
                row,
                expected,
                actual: cells.cell_count(),
            });
        }

        let permutations = all_permutations(&rows, &column_types, registry)?;

        Ok(Self {
            rows,
            column_types,
            permutations,
            sort: None,
            first_click: registry.config().first_click,
        })
    }
}

impl<R> TableSortState<R> {
    /// Rows in their original order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_types.len()
    }

    /// Declared column types.
    pub fn column_types(&self) -> &[ColumnType] {
        &self.column_types
    }

    /// Ascending permutation of a column.
    pub fn permutation(&self, column: usize) -> Option<&Permutation> {
        self.permutations.get(column)
    }

    /// Active sort column and direction.
    pub fn sort(&self) -> Option<(usize, Direction)> {
        self.sort
    }

    /// Active sort column.
    pub fn sort_column(&self) -> Option<usize> {
        self.sort.map(|(column, _)| column)
    }

    /// True if sorted ascending. Always false when unsorted.
    pub fn ascending(&self) -> bool {
        self.sort.is_some_and(|(_, direction)| direction.is_ascending())
    }

    // -------------------------------------------------------------------------
    // State changes
    // -------------------------------------------------------------------------

    /// Applies a click on a column header.
    ///
    /// Clicking the sorted column flips its direction. Clicking any other
    /// column sorts by it in the first-click direction (descending unless
    /// configured otherwise).
    pub fn do_click(&mut self, column: usize) -> Result<(), StateError> {
        self.check_column(column)?;

        let new_sort = match self.sort {
            Some((current, direction)) if current == column => (column, direction.toggle()),
            _ => (column, self.first_click),
        };
        debug!("Click on column {}: {:?} -> {:?}", column, self.sort, new_sort);

        self.sort = Some(new_sort);
        Ok(())
    }

    /// Returns to the original order. Permutations are kept.
    pub fn reset_sort(&mut self) {
        self.sort = None;
    }

    /// Encodes the sort state as `<column><a|d>`.
    ///
    /// The unsorted state encodes to an empty string.
    pub fn encode(&self) -> String {
        match self.sort {
            Some((column, direction)) => format!("{}{}", column, direction.tag()),
            None => String::new(),
        }
    }

    /// Decodes a state string produced by [`encode`](Self::encode).
    ///
    /// On error the state is left unchanged.
    pub fn decode(&mut self, state: &str) -> Result<(), StateError> {
        let (column, direction) = parse_state(state)?;
        self.check_column(column)?;
        self.sort = Some((column, direction));
        Ok(())
    }

    fn check_column(&self, column: usize) -> Result<(), StateError> {
        if column < self.column_types.len() {
            Ok(())
        } else {
            Err(StateError::ColumnOutOfRange {
                column,
                columns: self.column_types.len(),
            })
        }
    }

    // -------------------------------------------------------------------------
    // Presentation
    // -------------------------------------------------------------------------

    /// Row indices in presentation order.
    pub fn order(&self) -> Vec<usize> {
        match self.sort {
            None => (0..self.rows.len()).collect(),
            Some((column, direction)) => self.permutations[column]
                .walk(direction.is_ascending())
                .collect(),
        }
    }

    /// Rows in presentation order.
    pub fn apply(&self) -> Vec<&R> {
        self.order().into_iter().map(|index| &self.rows[index]).collect()
    }

    /// Header arrow for a column, if it is the sorted one.
    pub fn indicator(&self, column: usize) -> Option<char> {
        match self.sort {
            Some((current, direction)) if current == column => Some(direction.arrow()),
            _ => None,
        }
    }

    /// True if the column is highlighted as the sort column.
    pub fn is_highlighted(&self, column: usize) -> bool {
        self.sort_column() == Some(column)
    }
}

/// Parses `<decimal column><a|d>`.
fn parse_state(state: &str) -> Result<(usize, Direction), StateError> {
    let invalid = || StateError::invalid_state(state);

    let mut chars = state.chars();
    let direction = chars
        .next_back()
        .and_then(Direction::from_tag)
        .ok_or_else(invalid)?;

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let column = digits.parse::<usize>().map_err(|_| invalid())?;

    Ok((column, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfig;

    fn state() -> TableSortState<[&'static str; 3]> {
        let rows = vec![
            ["Carol", "$10", "2020-03-01"],
            ["alice", "NA", "2019-12-31"],
            ["Bob", "$5", "2020-01-15"],
        ];
        TableSortState::new(
            rows,
            vec![
                ColumnType::CaseInsensitive,
                ColumnType::Number,
                ColumnType::Date,
            ],
            &SortKeyRegistry::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.sort(), None);
        assert!(!state.ascending());
        assert_eq!(state.encode(), "");
        assert_eq!(state.order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_permutations() {
        let state = state();
        assert_eq!(state.permutation(0).unwrap().as_slice(), &[1, 2, 0]);
        assert_eq!(state.permutation(1).unwrap().as_slice(), &[1, 2, 0]);
        assert_eq!(state.permutation(2).unwrap().as_slice(), &[1, 2, 0]);
        assert!(state.permutation(3).is_none());
    }

    #[test]
    fn test_click_cycle() {
        let mut state = state();

        state.do_click(2).unwrap();
        assert_eq!(state.sort(), Some((2, Direction::Desc)));
        assert_eq!(state.encode(), "2d");

        state.do_click(2).unwrap();
        assert_eq!(state.encode(), "2a");

        state.do_click(2).unwrap();
        assert_eq!(state.encode(), "2d");

        state.do_click(2).unwrap();
        state.do_click(0).unwrap();
        assert_eq!(state.encode(), "0d");
    }

    #[test]
    fn test_click_out_of_range() {
        let mut state = state();
        state.do_click(1).unwrap();
        assert_eq!(
            state.do_click(3),
            Err(StateError::ColumnOutOfRange {
                column: 3,
                columns: 3
            })
        );
        assert_eq!(state.encode(), "1d");
    }

    #[test]
    fn test_first_click_config() {
        let registry = SortKeyRegistry::new(SortConfig::default().with_first_click(Direction::Asc));
        let mut state =
            TableSortState::new(vec![["b"], ["a"]], vec![ColumnType::CaseSensitive], &registry)
                .unwrap();

        state.do_click(0).unwrap();
        assert_eq!(state.encode(), "0a");
        assert_eq!(state.order(), vec![1, 0]);
    }

    #[test]
    fn test_decode() {
        let mut state = state();
        state.decode("1a").unwrap();
        assert_eq!(state.sort(), Some((1, Direction::Asc)));
        assert!(state.ascending());

        state.decode("0d").unwrap();
        assert_eq!(state.sort(), Some((0, Direction::Desc)));
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let mut state = state();
        state.decode("1a").unwrap();

        for bad in ["2x", "", "a", "d", "-1a", "1 a", "x1a", "1ad", "99999999999999999999999a"] {
            assert_eq!(state.decode(bad), Err(StateError::invalid_state(bad)), "{bad}");
            assert_eq!(state.sort(), Some((1, Direction::Asc)));
        }

        assert_eq!(
            state.decode("7d"),
            Err(StateError::ColumnOutOfRange {
                column: 7,
                columns: 3
            })
        );
        assert_eq!(state.encode(), "1a");
    }

    #[test]
    fn test_reset_keeps_permutations() {
        let mut state = state();
        state.do_click(1).unwrap();
        let before = state.permutation(1).cloned();

        state.reset_sort();
        assert_eq!(state.sort(), None);
        assert!(!state.ascending());
        assert_eq!(state.permutation(1).cloned(), before);
        assert_eq!(state.order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_apply() {
        let mut state = state();
        state.decode("1a").unwrap();
        let names: Vec<_> = state.apply().iter().map(|row| row[0]).collect();
        assert_eq!(names, vec!["alice", "Bob", "Carol"]);

        state.decode("1d").unwrap();
        let names: Vec<_> = state.apply().iter().map(|row| row[0]).collect();
        assert_eq!(names, vec!["Carol", "Bob", "alice"]);
        assert_eq!(state.apply(), state.apply());
    }

    #[test]
    fn test_indicator() {
        let mut state = state();
        assert_eq!(state.indicator(0), None);

        state.do_click(0).unwrap();
        assert_eq!(state.indicator(0), Some('▾'));
        assert_eq!(state.indicator(1), None);
        assert!(state.is_highlighted(0));
        assert!(!state.is_highlighted(1));

        state.do_click(0).unwrap();
        assert_eq!(state.indicator(0), Some('▴'));
    }

    #[test]
    fn test_ragged_row() {
        let rows = vec![vec!["a", "1"], vec!["b"]];
        let result = TableSortState::new(
            rows,
            vec![ColumnType::CaseSensitive, ColumnType::Number],
            &SortKeyRegistry::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }
}
