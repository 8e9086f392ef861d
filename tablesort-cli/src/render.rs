//! Plain-text and JSON table output.

use serde::Serialize;
use tablesort_lib::TableSortState;
use tablesort_lib::key::ColumnType;
use tablesort_lib::table::Direction;
use unicode_width::UnicodeWidthStr;

/// Gap between columns.
const COLUMN_GAP: &str = "  ";

/// Render a table as aligned text, header first.
///
/// Number columns are right-aligned. The sorted column's header carries the
/// direction arrow, placed so the header text does not shift.
pub fn render_text(
    id: &str,
    headers: &[String],
    state: &TableSortState<Vec<String>>,
) -> String {
    let header_cells: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            let right = is_right_aligned(state, column);
            match state.indicator(column) {
                Some(arrow) if right => format!("{} {}", arrow, header),
                Some(arrow) => format!("{} {}", header, arrow),
                None => header.clone(),
            }
        })
        .collect();

    let rows = state.apply();

    let mut widths: Vec<usize> = header_cells.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(column) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let mut out = format!("# {}\n", id);
    out.push_str(&render_line(state, &header_cells, &widths));
    for row in rows {
        out.push_str(&render_line(state, row, &widths));
    }
    out
}

fn render_line(state: &TableSortState<Vec<String>>, cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            let pad = " ".repeat(width.saturating_sub(cell.width()));
            if is_right_aligned(state, column) {
                format!("{}{}", pad, cell)
            } else {
                format!("{}{}", cell, pad)
            }
        })
        .collect();
    format!("{}\n", padded.join(COLUMN_GAP).trim_end())
}

fn is_right_aligned(state: &TableSortState<Vec<String>>, column: usize) -> bool {
    state.column_types().get(column) == Some(&ColumnType::Number)
}

/// Active sort of a table in JSON output.
#[derive(Debug, Serialize)]
pub struct SortOutput {
    pub column: usize,
    pub direction: Direction,
}

/// A table in JSON output, rows in presentation order.
#[derive(Debug, Serialize)]
pub struct TableOutput<'a> {
    pub id: &'a str,
    pub headers: &'a [String],
    pub sort: Option<SortOutput>,
    pub state: String,
    pub rows: Vec<&'a Vec<String>>,
}

impl<'a> TableOutput<'a> {
    pub fn new(id: &'a str, headers: &'a [String], state: &'a TableSortState<Vec<String>>) -> Self {
        Self {
            id,
            headers,
            sort: state
                .sort()
                .map(|(column, direction)| SortOutput { column, direction }),
            state: state.encode(),
            rows: state.apply(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablesort_lib::key::SortKeyRegistry;
    use tablesort_lib::table::TableSource;

    fn table() -> (Vec<String>, TableSortState<Vec<String>>) {
        let source = TableSource::new("sales", vec!["Region".into(), "Revenue".into()])
            .with_column_types(["case-insensitive", "number"])
            .with_row(["West", "$1,500"])
            .with_row(["east", "NA"]);
        let headers = source.headers.clone();
        (headers, source.into_state(&SortKeyRegistry::default()).unwrap())
    }

    #[test]
    fn test_render_unsorted() {
        let (headers, state) = table();
        assert_eq!(
            render_text("sales", &headers, &state),
            "# sales\nRegion  Revenue\nWest     $1,500\neast         NA\n"
        );
    }

    #[test]
    fn test_render_sorted_with_arrow() {
        let (headers, mut state) = table();
        state.do_click(1).unwrap();
        assert_eq!(
            render_text("sales", &headers, &state),
            "# sales\nRegion  ▾ Revenue\nWest       $1,500\neast           NA\n"
        );

        state.do_click(0).unwrap();
        assert_eq!(
            render_text("sales", &headers, &state),
            "# sales\nRegion ▾  Revenue\nWest       $1,500\neast           NA\n"
        );
    }

    #[test]
    fn test_json_output() {
        let (headers, mut state) = table();
        state.decode("1a").unwrap();
        let json = serde_json::to_value(TableOutput::new("sales", &headers, &state)).unwrap();
        assert_eq!(json["sort"]["direction"], "asc");
        assert_eq!(json["state"], "1a");
        assert_eq!(json["rows"][0][0], "east");
    }
}
