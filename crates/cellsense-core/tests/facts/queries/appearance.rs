//! Tests for the appearance report.

use crate::row;
use cellsense_core::{AppearanceReport, CellFacts, PropertyId, PropertyValue, Rgb};
use pretty_assertions::assert_eq;

fn colorref(color: Rgb) -> i64 {
    color.to_colorref() as i64
}

#[test]
fn test_full_report_order() {
    let mut row = row(&["B2"]);
    let b2 = row.cells[0];
    let grid = &mut row.grid;
    grid.set_property(row.sheet, PropertyId::AreGridlinesVisible, true);
    grid.set_property(b2, PropertyId::Size, vec![64.0, 15.0]);
    grid.set_property(b2, PropertyId::Rotation, 90.0);
    grid.set_property(
        b2,
        PropertyId::OutlineColor,
        vec![
            colorref(Rgb::RED),
            colorref(Rgb::BLACK),
            colorref(Rgb::BLACK),
            colorref(Rgb::new(0, 0, 255)),
        ],
    );
    grid.set_property(b2, PropertyId::OutlineThickness, vec![1.0, 0.5, 0.0, 2.0]);
    grid.set_property(b2, PropertyId::FillColor, colorref(Rgb::YELLOW));
    grid.set_property(b2, PropertyId::FillType, 1i64);
    grid.set_property(b2, PropertyId::CellNumberFormat, "0.00%");
    grid.set_property(b2, PropertyId::HasDataValidation, true);
    grid.set_property(b2, PropertyId::DataValidationPrompt, "Enter a rate");
    grid.set_property(b2, PropertyId::HasConditionalFormatting, true);

    let report = CellFacts::new(&row.grid).appearance_report(&b2);
    assert_eq!(
        report,
        "Cell width: 64.0 pt\n\
         Cell height: 15.0 pt\n\
         Rotation: 90 degrees\n\
         Outline color: top=red, bottom=black, left=black, right=blue\n\
         Outline thickness: top=1, bottom=0.5, left=0, right=2\n\
         Fill color: yellow\n\
         Fill type: color\n\
         Number format: 0.00%\n\
         Has data validation\n\
         Data validation prompt: Enter a rate\n\
         Has conditional formatting\n\
         Gridlines are visible"
    );
}

#[test]
fn test_rotation_absent_keeps_size() {
    let mut row = row(&["A1"]);
    let a1 = row.cells[0];
    row.grid.set_property(a1, PropertyId::Size, vec![48.26, 20.0]);

    let report = CellFacts::new(&row.grid).appearance(&a1);
    assert_eq!(report.lines(), ["Cell width: 48.3 pt", "Cell height: 20.0 pt"]);
}

#[test]
fn test_fill_type_outside_enumeration_is_omitted() {
    let mut row = row(&["A1"]);
    let a1 = row.cells[0];
    row.grid.set_property(a1, PropertyId::Size, vec![64.0, 15.0]);
    row.grid.set_property(a1, PropertyId::FillColor, colorref(Rgb::WHITE));
    row.grid.set_property(a1, PropertyId::FillType, 7i64);

    let report = CellFacts::new(&row.grid).appearance(&a1);
    assert_eq!(
        report.lines(),
        [
            "Cell width: 64.0 pt",
            "Cell height: 15.0 pt",
            "Fill color: white",
        ]
    );
}

#[test]
fn test_malformed_values_are_omitted() {
    let mut row = row(&["A1"]);
    let a1 = row.cells[0];
    let grid = &mut row.grid;
    grid.set_property(a1, PropertyId::Rotation, "sideways");
    grid.set_property(a1, PropertyId::OutlineColor, vec![0i64, 0]);
    grid.set_property(a1, PropertyId::OutlineThickness, PropertyValue::Empty);
    grid.set_property(a1, PropertyId::FillType, 2.0);
    grid.set_property(a1, PropertyId::CellNumberFormat, "");
    grid.set_property(a1, PropertyId::DataValidationPrompt, "");
    grid.set_property(a1, PropertyId::HasConditionalFormatting, false);

    let report = CellFacts::new(&row.grid).appearance(&a1);
    assert!(report.is_empty(), "unexpected lines: {:?}", report.lines());
}

#[test]
fn test_gridlines_hidden_on_sheet() {
    let mut row = row(&["A1"]);
    let a1 = row.cells[0];
    row.grid
        .set_property(row.sheet, PropertyId::AreGridlinesVisible, false);
    row.grid.set_property(a1, PropertyId::HasDataValidation, 1i64);

    let report = CellFacts::new(&row.grid).appearance(&a1);
    assert_eq!(report.lines(), ["Has data validation"]);
}

#[test]
fn test_gridlines_through_data_table() {
    let mut grid = cellsense_core::MemoryProvider::new();
    let sheet = grid.add_sheet("Budget");
    grid.set_property(sheet, PropertyId::AreGridlinesVisible, true);
    let sheet_grid = grid.add_table(sheet);
    let data_table = grid.add_table(sheet_grid);
    let c4 = grid.add_cell(Some(data_table), "C4");

    let facts = CellFacts::new(&grid);
    assert!(facts.appearance_facts(&c4).gridlines_visible);
    assert_eq!(facts.appearance(&c4).lines(), ["Gridlines are visible"]);
}

#[test]
fn test_report_title() {
    assert_eq!(AppearanceReport::TITLE, "Cell Appearance");
}
