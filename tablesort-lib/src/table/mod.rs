//! Sortable tables.
//!
//! A [`TableSortState`] is built once per table from its rows and column
//! types, then driven by header clicks and URL hash decoding.

mod direction;
mod permutation;
mod row;
mod state;

pub use direction::Direction;
pub use permutation::Permutation;
pub use row::TableRow;
pub use row::TableSource;
pub use state::TableSortState;
