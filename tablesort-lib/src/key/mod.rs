//! Column types and sort key extraction.
//!
//! Each column declares one of four [`ColumnType`]s. The
//! [`SortKeyRegistry`] turns a column type into a key function that maps
//! cell text to a [`SortKey`].

mod sort_key;

pub use sort_key::SortKey;

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use serde::Deserialize;
use serde::Serialize;

use crate::config::SortConfig;
use crate::error::ConfigError;

/// Schema types rendered as number columns.
const NUMERIC_SCHEMA_TYPES: &[&str] = &["integer", "double", "float", "number"];

/// How a column's cell text is turned into a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnType {
    /// Text compared as-is.
    CaseSensitive,
    /// Text compared after lower-casing.
    CaseInsensitive,
    /// Numbers, with currency symbols and thousands separators stripped.
    Number,
    /// Dates in RFC 3339 or one of the configured formats.
    Date,
}

impl ColumnType {
    /// All column types, in declaration order.
    pub const ALL: [ColumnType; 4] = [
        ColumnType::CaseSensitive,
        ColumnType::CaseInsensitive,
        ColumnType::Number,
        ColumnType::Date,
    ];

    /// Returns the declaration token for this type.
    pub fn token(self) -> &'static str {
        match self {
            ColumnType::CaseSensitive => "case-sensitive",
            ColumnType::CaseInsensitive => "case-insensitive",
            ColumnType::Number => "number",
            ColumnType::Date => "date",
        }
    }

    /// Looks up a column type by its declaration token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.token() == token)
    }

    /// Picks the column type for a data-schema type.
    ///
    /// Numeric schema types sort as numbers unless the column is displayed
    /// through a strftime format, in which case the rendered text is sorted.
    pub fn from_schema_type(schema_type: &str, has_strftime: bool) -> Self {
        if NUMERIC_SCHEMA_TYPES.contains(&schema_type) && !has_strftime {
            ColumnType::Number
        } else {
            ColumnType::CaseInsensitive
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Maps column types to key functions.
///
/// # Example
///
/// ```
/// use tablesort_lib::key::{ColumnType, SortKeyRegistry};
///
/// let registry = SortKeyRegistry::default();
/// let key = registry.key_fn(ColumnType::Number);
///
/// assert!(key("NA").unwrap() < key("$1,000").unwrap());
/// assert!(key("ten").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortKeyRegistry {
    config: SortConfig,
}

impl SortKeyRegistry {
    /// Creates a registry using the given configuration.
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Resolves a declaration token for `column`.
    pub fn resolve(&self, column: usize, token: &str) -> Result<ColumnType, ConfigError> {
        ColumnType::from_token(token).ok_or_else(|| ConfigError::unknown_column_type(column, token))
    }

    /// Returns the key function for a column type.
    ///
    /// The function returns `None` when the text cannot be converted.
    pub fn key_fn(&self, column_type: ColumnType) -> impl Fn(&str) -> Option<SortKey> + '_ {
        move |text: &str| self.key(column_type, text)
    }

    /// Extracts the sort key of `text` for a column type.
    pub fn key(&self, column_type: ColumnType, text: &str) -> Option<SortKey> {
        match column_type {
            ColumnType::CaseSensitive => Some(SortKey::Text(text.to_string())),
            ColumnType::CaseInsensitive => Some(SortKey::Text(text.to_lowercase())),
            ColumnType::Number => self.number_key(text),
            ColumnType::Date => self.date_key(text),
        }
    }

    fn number_key(&self, text: &str) -> Option<SortKey> {
        if self.config.is_missing(text.trim()) {
            return Some(SortKey::Missing);
        }

        let stripped: String = text
            .chars()
            .filter(|c| {
                !c.is_whitespace()
                    && *c != self.config.thousands_separator
                    && !self.config.currency_symbols.contains(c)
            })
            .collect();

        // -0 and 0 tie.
        match stripped.parse::<f64>() {
            Ok(n) if !n.is_nan() => Some(SortKey::Number(n + 0.0)),
            _ => None,
        }
    }

    fn date_key(&self, text: &str) -> Option<SortKey> {
        let trimmed = text.trim();
        if self.config.is_missing(trimmed) {
            return Some(SortKey::Missing);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(SortKey::Date(dt.naive_utc()));
        }

        for format in &self.config.date_formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(SortKey::Date(dt));
            }
            if let Ok(day) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(SortKey::Date(day.and_time(NaiveTime::MIN)));
            }
        }
        None
    }
}
