//! Common grid builders for E2E tests.

use cellsense_core::{ElementId, MemoryProvider};

/// A sheet with one grid and a single row of cells.
pub struct Row {
    pub grid: MemoryProvider,
    pub sheet: ElementId,
    pub table: ElementId,
    pub cells: Vec<ElementId>,
}

/// Build a row of cells `addresses` under `Sheet1`.
///
/// # Example
///
/// ```rust,ignore
/// let row = row(&["A1", "B1"]);
/// let a1 = row.cells[0];
/// ```
pub fn row(addresses: &[&str]) -> Row {
    let mut grid = MemoryProvider::new();
    let sheet = grid.add_sheet("Sheet1");
    let table = grid.add_table(sheet);
    let cells = addresses
        .iter()
        .map(|address| grid.add_cell(Some(table), address))
        .collect();
    Row {
        grid,
        sheet,
        table,
        cells,
    }
}

/// Build a row whose cells show `values` as their displayed values.
#[allow(dead_code)]
pub fn valued_row(cells: &[(&str, &str)]) -> Row {
    let addresses: Vec<&str> = cells.iter().map(|(address, _)| *address).collect();
    let mut row = row(&addresses);
    for (id, (_, value)) in row.cells.clone().into_iter().zip(cells) {
        row.grid.set_displayed_value(id, value);
    }
    row
}
