//! URL fragment codec.

use std::borrow::Cow;
use std::fmt;

use log::trace;

use crate::error::HashError;

use super::HashStore;

/// Key/value pairs encoded in a URL fragment as `k1=v1&k2=v2`.
///
/// Keys and values are percent-encoded, except for `:` which stays readable
/// so table keys look like `t:sales=1a`.
///
/// # Example
///
/// ```
/// use tablesort_lib::hash::{HashStore, UrlHash};
///
/// let mut hash = UrlHash::parse("#metric=Foo.bar&t:sales=1a").unwrap();
/// assert_eq!(hash.get("t:sales").as_deref(), Some("1a"));
///
/// hash.set("t:sales", "0d");
/// assert_eq!(hash.encode(), "metric=Foo.bar&t:sales=0d");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlHash {
    entries: Vec<(String, String)>,
}

impl UrlHash {
    /// Creates an empty hash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a fragment. A leading `#` is optional.
    ///
    /// Empty segments are skipped, a segment without `=` gets an empty
    /// value, and a repeated key keeps the last value.
    pub fn parse(fragment: &str) -> Result<Self, HashError> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let mut hash = Self::new();

        for segment in fragment.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key)?;
            let value = decode_component(value)?;
            trace!("Hash entry {:?} = {:?}", key, value);
            hash.set(&key, &value);
        }

        Ok(hash)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl HashStore for UrlHash {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    fn delete(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect()
    }

    fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for UrlHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

fn encode_component(s: &str) -> String {
    s.split(':')
        .map(urlencoding::encode)
        .collect::<Vec<Cow<'_, str>>>()
        .join(":")
}

fn decode_component(s: &str) -> Result<String, HashError> {
    urlencoding::decode(s)
        .map(Cow::into_owned)
        .map_err(|_| HashError::Decode {
            component: s.to_string(),
        })
}
