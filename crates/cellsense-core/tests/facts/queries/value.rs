//! Tests for the value/description override.

use crate::valued_row;
use cellsense_core::CellFacts;

#[test]
fn test_pass_through_without_range() {
    let mut row = valued_row(&[("A1", "10"), ("A2", "20")]);
    let a1 = row.cells[0];
    row.grid.set_item_status(a1, "Validation: whole number");

    let facts = CellFacts::new(&row.grid);
    assert_eq!(facts.value(&a1).as_deref(), Some("10"));
    assert_eq!(
        facts.description(&a1).as_deref(),
        Some("Validation: whole number")
    );
}

#[test]
fn test_single_selection_still_passes_through() {
    let mut row = valued_row(&[("A1", "10"), ("A2", "20")]);
    let a1 = row.cells[0];
    row.grid.select(row.table, &[a1]).unwrap();

    let facts = CellFacts::new(&row.grid);
    assert_eq!(facts.value(&a1).as_deref(), Some("10"));
}

#[test]
fn test_range_suppresses_value_and_description() {
    let mut row = valued_row(&[("A1", "10"), ("A2", "20"), ("A3", "30")]);
    let cells = row.cells.clone();
    row.grid.set_item_status(cells[0], "Validation: whole number");
    row.grid.select(row.table, &cells).unwrap();

    let facts = CellFacts::new(&row.grid);
    for cell in &cells {
        assert_eq!(facts.value(cell), None);
        assert_eq!(facts.description(cell), None);
    }
}
