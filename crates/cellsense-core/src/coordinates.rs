//! Coordinate text for "where am I" queries
//!
//! Some Excel 2016 builds quote the column letter when reporting a cell's
//! name (`"B"3`). Quotes are stripped from every address we speak.

use crate::options::FactOptions;
use crate::provider::CellProvider;
use crate::selection::{resolve_selection, SelectionState};

/// Format a resolved selection, falling back to `address` when no range is active
pub fn format_coordinates(
    selection: &SelectionState,
    address: &str,
    options: &FactOptions,
) -> String {
    match selection {
        SelectionState::RangeSelection { first, last } => format!(
            "{} {} through {} {}",
            options.strip_quotes(&first.address),
            first.value,
            options.strip_quotes(&last.address),
            last.value
        ),
        SelectionState::NoSelection => options.strip_quotes(address),
    }
}

/// Coordinate text for a cell: its cleaned address, or the active range
pub fn coordinate_text<P: CellProvider>(
    provider: &P,
    cell: &P::Element,
    options: &FactOptions,
) -> String {
    let selection = resolve_selection(provider, cell);
    let address = provider.address(cell).unwrap_or_default();
    format_coordinates(&selection, &address, options)
}
