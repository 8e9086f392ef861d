//! Sortable table state
//!
//! Sorts a table by one column at a time, using precomputed per-column
//! permutations, and keeps each table's sort state in a URL fragment so it
//! can be bookmarked and shared.

pub mod config;
pub mod error;
pub mod hash;
pub mod key;
pub mod registry;
pub mod status;
pub mod table;

pub use config::SortConfig;
pub use registry::ClickEvent;
pub use registry::TableRegistry;
pub use table::TableSortState;
