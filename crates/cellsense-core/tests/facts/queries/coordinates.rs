//! Tests for coordinate text.

use crate::{row, valued_row};
use cellsense_core::{CellFacts, FactOptions};

#[test]
fn test_range_selection_text() {
    let mut row = valued_row(&[("A1", "10"), ("A2", "20"), ("A3", "30")]);
    let cells = row.cells.clone();
    row.grid.select(row.table, &cells).unwrap();

    let facts = CellFacts::new(&row.grid);
    assert_eq!(facts.coordinate_text(&cells[1]), "A1 10 through A3 30");
}

#[test]
fn test_quoted_range_endpoints() {
    let mut row = valued_row(&[("\"A\"1", "10"), ("\"B\"1", "11"), ("\"C\"1", "12")]);
    let cells = row.cells.clone();
    row.grid.select(row.table, &cells).unwrap();

    let facts = CellFacts::new(&row.grid);
    assert_eq!(facts.coordinate_text(&cells[0]), "A1 10 through C1 12");
}

#[test]
fn test_single_selected_cell_uses_own_address() {
    let mut row = row(&["\"D\"14"]);
    let d14 = row.cells[0];
    row.grid.select(row.table, &[d14]).unwrap();

    let facts = CellFacts::new(&row.grid);
    assert_eq!(facts.coordinate_text(&d14), "D14");
}

#[test]
fn test_non_cell_query_is_safe() {
    let mut grid = cellsense_core::MemoryProvider::new();
    let sheet = grid.add_sheet("Sheet1");
    let facts = CellFacts::new(&grid);
    // Sheets are not cells, but the query must still be safe.
    assert_eq!(facts.coordinate_text(&sheet), "Sheet1");
}

#[test]
fn test_configured_quote_chars() {
    let row = row(&["'Data'!A1"]);
    let options = FactOptions {
        quote_chars: vec!['\''],
        ..Default::default()
    };
    let facts = CellFacts::with_options(&row.grid, options);
    assert_eq!(facts.coordinate_text(&row.cells[0]), "Data!A1");
}

#[test]
fn test_extra_quote_chars_still_strip_double_quotes() {
    let row = row(&["\"B\"3"]);
    let options = FactOptions {
        quote_chars: vec!['\''],
        ..Default::default()
    };
    let facts = CellFacts::with_options(&row.grid, options);
    assert_eq!(facts.coordinate_text(&row.cells[0]), "B3");
}

#[test]
fn test_unrealized_range_end_falls_back_to_own_address() {
    let mut row = valued_row(&[("\"A\"1", "10"), ("\"A\"2", "20")]);
    let a1 = row.cells[0];
    row.grid.select(row.table, &[a1]).unwrap();
    row.grid.select_unrealized(row.table, 1_000).unwrap();

    let facts = CellFacts::new(&row.grid);
    assert_eq!(facts.value(&a1), None);
    assert_eq!(facts.coordinate_text(&row.cells[1]), "A2");
}
