//! Tests for the derived state set.

use crate::row;
use cellsense_core::{CellFacts, FactOptions, PropertyId, State};

#[test]
fn test_overflow_into_empty_neighbor() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid
        .set_truncated_text(a1, &"r".repeat(50), &"r".repeat(20));
    row.grid.set_text(b1, "");

    let states = CellFacts::new(&row.grid).states(&a1);
    assert!(states.contains(State::Overflowing));
    assert!(!states.contains(State::Cropped));
}

#[test]
fn test_cropped_by_neighbor_content() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid
        .set_truncated_text(a1, &"r".repeat(50), &"r".repeat(20));
    row.grid.set_text(b1, "1,204.50");

    let states = CellFacts::new(&row.grid).states(&a1);
    assert!(states.contains(State::Cropped));
    assert!(!states.contains(State::Overflowing));
}

#[test]
fn test_fully_visible_text_is_neither() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid.set_text(a1, "Total");
    row.grid.set_text(b1, "1,204.50");

    let states = CellFacts::new(&row.grid).states(&a1);
    assert!(!states.contains(State::Cropped));
    assert!(!states.contains(State::Overflowing));
}

#[test]
fn test_all_additions_together() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid.add_base_state(a1, State::Focused);
    row.grid.add_base_state(a1, State::ReadOnly);
    row.grid
        .set_truncated_text(a1, "Quarterly revenue by region", "Quarterly");
    row.grid.set_text(b1, "North");
    row.grid
        .set_property(a1, PropertyId::CellFormula, "=CONCAT(C1, D1)");
    row.grid
        .set_property(a1, PropertyId::HasDataValidationDropdown, 1i64);

    let states = CellFacts::new(&row.grid).states(&a1);
    assert_eq!(
        states.to_string(),
        "focused, read only, cropped, has formula, has popup"
    );
}

#[test]
fn test_states_are_recomputed_per_query() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid
        .set_truncated_text(a1, "Quarterly revenue by region", "Quarterly");

    let before = CellFacts::new(&row.grid).states(&a1);
    assert!(before.contains(State::Overflowing));

    row.grid.set_text(b1, "North");
    let after = CellFacts::new(&row.grid).states(&a1);
    assert!(after.contains(State::Cropped));
}

#[test]
fn test_text_limit_does_not_hide_overflow() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid
        .set_truncated_text(a1, &"r".repeat(50), &"r".repeat(20));
    row.grid.set_text(b1, "");

    let options = FactOptions {
        text_length_limit: Some(10),
        ..Default::default()
    };
    let states = CellFacts::with_options(&row.grid, options).states(&a1);
    assert!(states.contains(State::Overflowing));
}

#[test]
fn test_text_without_visible_range_is_neither() {
    let mut row = row(&["A1", "B1"]);
    let (a1, b1) = (row.cells[0], row.cells[1]);
    row.grid.set_hidden_text(a1, &"r".repeat(50));
    row.grid.set_text(b1, "7");

    let states = CellFacts::new(&row.grid).states(&a1);
    assert!(!states.contains(State::Overflowing));
    assert!(!states.contains(State::Cropped));
}
