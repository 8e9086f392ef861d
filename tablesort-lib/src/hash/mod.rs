//! URL hash state.
//!
//! Sort state is kept in the page's URL fragment as `key=value` pairs so it
//! can be bookmarked and shared. [`HashStore`] is the contract the table
//! registry relies on; [`UrlHash`] implements it over a fragment string.

mod url_hash;

pub use url_hash::UrlHash;

/// Key/value storage backed by a URL fragment.
///
/// Keys keep their insertion order.
pub trait HashStore {
    /// Get the value for a key.
    fn get(&self, key: &str) -> Option<String>;

    /// Set the value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Delete a key. Deleting an absent key does nothing.
    fn delete(&mut self, key: &str);

    /// Get all keys starting with a prefix, in order.
    fn keys_with_prefix(&self, prefix: &str) -> Vec<String>;

    /// Encode the whole store as a fragment, without the leading `#`.
    fn encode(&self) -> String;
}
