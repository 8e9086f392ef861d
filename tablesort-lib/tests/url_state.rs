use tablesort_lib::error::{ConfigError, StateError};
use tablesort_lib::hash::{HashStore, UrlHash};
use tablesort_lib::key::SortKeyRegistry;
use tablesort_lib::status::LogStatus;
use tablesort_lib::table::{Direction, TableSource};
use tablesort_lib::{ClickEvent, TableRegistry};

const TABLES: &str = r#"[
    {
        "id": "sales",
        "headers": ["Region", "Revenue"],
        "column_types": ["case-insensitive", "number"],
        "rows": [
            ["West", "$1,500"],
            ["east", "NA"],
            ["North", "$900"]
        ]
    },
    {
        "id": "holidays",
        "headers": ["Name", "Date"],
        "column_types": ["case-sensitive", "date"],
        "rows": [
            ["Labor Day", "2015-09-07"],
            ["New Year", "2015-01-01"]
        ]
    }
]"#;

fn load() -> TableRegistry<Vec<String>> {
    let sources: Vec<TableSource> = serde_json::from_str(TABLES).unwrap();
    let keys = SortKeyRegistry::default();

    let mut tables: TableRegistry<Vec<String>> = TableRegistry::default();
    for source in sources {
        tables.register_source(source, &keys).unwrap();
    }
    tables
}

fn names(tables: &TableRegistry<Vec<String>>, id: &str) -> Vec<String> {
    tables
        .get(id)
        .unwrap()
        .apply()
        .into_iter()
        .map(|row| row[0].clone())
        .collect()
}

// ============================================================================
// State strings
// ============================================================================

#[test]
fn test_encode_decode_round_trip() {
    let mut tables = load();
    let state = tables.get_mut("sales").unwrap();

    for column in 0..2 {
        for direction in [Direction::Asc, Direction::Desc] {
            let encoded = format!("{}{}", column, direction.tag());
            state.decode(&encoded).unwrap();
            assert_eq!(state.sort(), Some((column, direction)));
            assert_eq!(state.encode(), encoded);
        }
    }
}

#[test]
fn test_malformed_state_leaves_table_untouched() {
    let mut tables = load();
    let state = tables.get_mut("sales").unwrap();
    state.decode("1d").unwrap();

    assert_eq!(state.decode("2x"), Err(StateError::invalid_state("2x")));
    assert_eq!(state.sort_column(), Some(1));
    assert!(!state.ascending());
}

// ============================================================================
// Life of a click
// ============================================================================

#[test]
fn test_click_then_navigate() {
    let mut tables = load();
    let mut hash = UrlHash::parse("#metric=Foo.bar").unwrap();

    let fragment = tables
        .dispatch(&mut hash, &ClickEvent::new("sales", 1))
        .unwrap();
    assert_eq!(fragment, "metric=Foo.bar&t:sales=1d");

    // A fresh page load reading the same fragment sees the same order.
    let mut reloaded = load();
    let hash = UrlHash::parse(&fragment).unwrap();
    let errors = reloaded.update_tables(&hash, LogStatus);
    assert!(errors.is_empty());

    assert_eq!(names(&reloaded, "sales"), vec!["West", "North", "east"]);
    assert_eq!(names(&reloaded, "holidays"), vec!["Labor Day", "New Year"]);
}

#[test]
fn test_second_click_ascends() {
    let mut tables = load();
    let mut hash = UrlHash::new();

    tables
        .dispatch(&mut hash, &ClickEvent::new("holidays", 1))
        .unwrap();
    let fragment = tables
        .dispatch(&mut hash, &ClickEvent::new("holidays", 1))
        .unwrap();
    assert_eq!(fragment, "t:holidays=1a");
    assert_eq!(names(&tables, "holidays"), vec!["New Year", "Labor Day"]);
}

#[test]
fn test_navigation_back_to_unsorted() {
    let mut tables = load();
    let mut messages: Vec<String> = Vec::new();

    tables.update_tables(&UrlHash::parse("t:sales=0a").unwrap(), &mut messages);
    assert_eq!(names(&tables, "sales"), vec!["east", "North", "West"]);

    tables.update_tables(&UrlHash::new(), &mut messages);
    assert_eq!(names(&tables, "sales"), vec!["West", "east", "North"]);
    assert!(messages.is_empty());
}

#[test]
fn test_bad_hash_is_reported() {
    let mut tables = load();
    let mut messages: Vec<String> = Vec::new();
    let hash = UrlHash::parse("t:sales=9a&t:nope=0d").unwrap();

    let errors = tables.update_tables(&hash, &mut messages);
    assert_eq!(errors.len(), 2);
    assert_eq!(messages.len(), 2);
    assert_eq!(tables.get("sales").unwrap().sort(), None);
    assert_eq!(hash.get("t:sales").as_deref(), Some("9a"));
}

// ============================================================================
// Table sources
// ============================================================================

#[test]
fn test_unknown_column_type_in_json() {
    let json = r#"{"id": "x", "headers": ["A"], "column_types": ["money"], "rows": [["1"]]}"#;
    let source: TableSource = serde_json::from_str(json).unwrap();

    let mut tables: TableRegistry<Vec<String>> = TableRegistry::default();
    assert_eq!(
        tables.register_source(source, &SortKeyRegistry::default()),
        Err(ConfigError::unknown_column_type(0, "money"))
    );
    assert!(tables.is_empty());
}

#[test]
fn test_missing_colgroup_in_json() {
    let json = r#"{"id": "x", "headers": ["A"], "rows": [["1"]]}"#;
    let source: TableSource = serde_json::from_str(json).unwrap();

    let mut tables: TableRegistry<Vec<String>> = TableRegistry::default();
    assert_eq!(
        tables.register_source(source, &SortKeyRegistry::default()),
        Err(ConfigError::missing_column_types("x"))
    );
}
