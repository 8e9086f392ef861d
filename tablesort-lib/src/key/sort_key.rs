//! Totally ordered sort keys

use std::cmp::Ordering;

use chrono::NaiveDateTime;

/// A comparable key extracted from a cell's text.
///
/// All keys of one column share a variant, except `Missing`, which may appear
/// in number and date columns and orders below every other key.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// A missing value (`NA`, blank). Lowest of all keys.
    Missing,
    /// Text, compared by code point.
    Text(String),
    /// A finite or infinite number. Never NaN.
    Number(f64),
    /// A date, with midnight filled in when only a day was given.
    Date(NaiveDateTime),
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => 0,
            SortKey::Text(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Date(_) => 3,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_sorts_lowest() {
        assert!(SortKey::Missing < SortKey::Number(f64::NEG_INFINITY));
        assert!(SortKey::Missing < SortKey::Number(f64::MIN));
        assert!(SortKey::Missing < SortKey::Text(String::new()));

        let day = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(SortKey::Missing < SortKey::Date(day));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert!(SortKey::Number(5.0) < SortKey::Number(10.0));
        assert!(SortKey::Number(-1.5) < SortKey::Number(0.0));
        assert_eq!(SortKey::Number(2.0), SortKey::Number(2.0));
    }

    #[test]
    fn test_text_compares_by_code_point() {
        assert!(SortKey::Text("B".into()) < SortKey::Text("a".into()));
        assert!(SortKey::Text("apple".into()) < SortKey::Text("apples".into()));
    }
}
