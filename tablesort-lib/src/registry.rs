//! Table registry and click dispatch.
//!
//! Life of a click:
//!
//! 1. [`TableRegistry::dispatch`] applies the click to the clicked table.
//! 2. Every table's state is re-encoded into the URL hash, so tables stay
//!    consistent with each other.
//! 3. The caller navigates to the returned fragment.
//! 4. On navigation, [`TableRegistry::update_tables`] decodes the hash back
//!    into each table, and the caller presents `apply()` of each table.

use std::collections::BTreeMap;

use log::debug;

use crate::config::SortConfig;
use crate::error::ConfigError;
use crate::error::StateError;
use crate::hash::HashStore;
use crate::key::SortKeyRegistry;
use crate::status::StatusSink;
use crate::table::TableSortState;
use crate::table::TableSource;

/// A click on a column header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    /// Id of the clicked table.
    pub table_id: String,
    /// Index of the clicked column.
    pub column: usize,
}

impl ClickEvent {
    /// Creates a click event.
    pub fn new(table_id: impl Into<String>, column: usize) -> Self {
        Self {
            table_id: table_id.into(),
            column,
        }
    }
}

/// Sort states of all tables on a page, keyed by table id.
#[derive(Debug, Clone)]
pub struct TableRegistry<R> {
    tables: BTreeMap<String, TableSortState<R>>,
    prefix: String,
}

impl<R> Default for TableRegistry<R> {
    fn default() -> Self {
        Self::new(&SortConfig::default())
    }
}

impl<R> TableRegistry<R> {
    /// Creates an empty registry using the config's table key prefix.
    pub fn new(config: &SortConfig) -> Self {
        Self {
            tables: BTreeMap::new(),
            prefix: config.table_key_prefix.clone(),
        }
    }

    /// Adds a table, returning the state it replaced, if any.
    pub fn insert(
        &mut self,
        table_id: impl Into<String>,
        state: TableSortState<R>,
    ) -> Option<TableSortState<R>> {
        self.tables.insert(table_id.into(), state)
    }

    /// Get a table's state.
    pub fn get(&self, table_id: &str) -> Option<&TableSortState<R>> {
        self.tables.get(table_id)
    }

    /// Get a table's state mutably.
    pub fn get_mut(&mut self, table_id: &str) -> Option<&mut TableSortState<R>> {
        self.tables.get_mut(table_id)
    }

    /// Iterates tables in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TableSortState<R>)> {
        self.tables.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// URL hash key of a table.
    pub fn key(&self, table_id: &str) -> String {
        format!("{}{}", self.prefix, table_id)
    }

    /// Handles a header click and returns the fragment to navigate to.
    ///
    /// An unknown table or column leaves every state and the hash unchanged.
    pub fn dispatch(
        &mut self,
        hash: &mut impl HashStore,
        event: &ClickEvent,
    ) -> Result<String, StateError> {
        let state = self
            .tables
            .get_mut(&event.table_id)
            .ok_or_else(|| StateError::unknown_table(&event.table_id))?;
        state.do_click(event.column)?;

        self.write_state(hash);
        Ok(hash.encode())
    }

    /// Writes every table's state into the hash.
    ///
    /// Unsorted tables have their key removed.
    pub fn write_state(&self, hash: &mut impl HashStore) {
        for (table_id, state) in &self.tables {
            let key = self.key(table_id);
            let encoded = state.encode();
            if encoded.is_empty() {
                hash.delete(&key);
            } else {
                hash.set(&key, &encoded);
            }
        }
    }

    /// Decodes every table key of the hash into the matching table.
    ///
    /// Unknown tables and bad state strings are reported to `status` and
    /// skipped. The affected table keeps its state. Returns the errors.
    pub fn decode_state(
        &mut self,
        hash: &impl HashStore,
        mut status: impl StatusSink,
    ) -> Vec<StateError> {
        let mut errors = Vec::new();

        for key in hash.keys_with_prefix(&self.prefix) {
            let table_id = &key[self.prefix.len()..];
            let result = match self.tables.get_mut(table_id) {
                Some(state) => {
                    let encoded = hash.get(&key).unwrap_or_default();
                    state.decode(&encoded)
                }
                None => Err(StateError::unknown_table(table_id)),
            };

            if let Err(e) = result {
                status.report(&e.to_string());
                errors.push(e);
            }
        }

        errors
    }

    /// Resets every table and re-reads its state from the hash.
    ///
    /// Tables without a key in the hash end up unsorted.
    pub fn update_tables(
        &mut self,
        hash: &impl HashStore,
        status: impl StatusSink,
    ) -> Vec<StateError> {
        for state in self.tables.values_mut() {
            state.reset_sort();
        }
        let errors = self.decode_state(hash, status);
        debug!(
            "Updated {} tables from hash ({} errors)",
            self.tables.len(),
            errors.len()
        );
        errors
    }
}

impl TableRegistry<Vec<String>> {
    /// Builds and registers the sort state of a table source.
    pub fn register_source(
        &mut self,
        source: TableSource,
        registry: &SortKeyRegistry,
    ) -> Result<(), ConfigError> {
        let table_id = source.id.clone();
        let state = source.into_state(registry)?;
        debug!("Registered table '{}' ({} rows)", table_id, state.row_count());
        self.insert(table_id, state);
        Ok(())
    }
}
