//! Sort configuration

use serde::Deserialize;
use serde::Serialize;

use crate::table::Direction;

/// Configuration for key extraction and URL sort state.
///
/// # Example
///
/// ```
/// use tablesort_lib::config::SortConfig;
/// use tablesort_lib::table::Direction;
///
/// let config = SortConfig::default()
///     .with_missing_tokens(["NA", "n/a"])
///     .with_first_click(Direction::Asc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Cell texts that mean "no value" in number and date columns.
    ///
    /// Missing values sort below everything else.
    ///
    /// Default: `["NA"]`
    pub missing_tokens: Vec<String>,

    /// Characters stripped from number cells before parsing.
    ///
    /// Default: `$ € £ ¥`
    pub currency_symbols: Vec<char>,

    /// Thousands separator stripped from number cells before parsing.
    ///
    /// Default: `,`
    pub thousands_separator: char,

    /// `chrono` formats tried in order for date cells, after RFC 3339.
    pub date_formats: Vec<String>,

    /// Direction used when a column is clicked for the first time.
    ///
    /// Default: descending, so the largest values come first.
    pub first_click: Direction,

    /// Prefix of per-table keys in the URL hash.
    ///
    /// Default: `t:`
    pub table_key_prefix: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            missing_tokens: vec!["NA".to_string()],
            currency_symbols: vec!['$', '€', '£', '¥'],
            thousands_separator: ',',
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y/%m/%d".to_string(),
            ],
            first_click: Direction::Desc,
            table_key_prefix: "t:".to_string(),
        }
    }
}

impl SortConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tokens treated as missing values.
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the currency symbols stripped from numbers.
    pub fn with_currency_symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.currency_symbols = symbols.into_iter().collect();
        self
    }

    /// Sets the thousands separator.
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    /// Sets the date formats.
    pub fn with_date_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the direction of a first click on a column.
    pub fn with_first_click(mut self, direction: Direction) -> Self {
        self.first_click = direction;
        self
    }

    /// Sets the URL hash key prefix for tables.
    pub fn with_table_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_key_prefix = prefix.into();
        self
    }

    /// Returns true if `text` (already trimmed) is a missing-value token.
    pub(crate) fn is_missing(&self, text: &str) -> bool {
        text.is_empty() || self.missing_tokens.iter().any(|t| t == text)
    }
}
