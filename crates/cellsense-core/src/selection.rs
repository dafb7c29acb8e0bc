//! Selection state resolution
//!
//! Decides whether the accessible target is a single focused cell or an active
//! multi-cell range selection. Addresses are returned raw, quoting included;
//! stripping is left to the coordinate formatter.

use crate::error::Result;
use crate::provider::{navigate, CellProvider, Relation};

/// One endpoint of a range selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionEndpoint {
    /// Raw address label as reported by the provider
    pub address: String,
    /// Displayed value, empty when the provider reports none
    pub value: String,
}

/// Selection state of a cell's enclosing container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No container, or at most one selected item
    #[default]
    NoSelection,
    /// More than one item selected
    RangeSelection {
        first: SelectionEndpoint,
        last: SelectionEndpoint,
    },
}

impl SelectionState {
    pub fn is_range(&self) -> bool {
        matches!(self, SelectionState::RangeSelection { .. })
    }
}

/// Whether the cell's container has more than one selected item
///
/// Cheaper than [`resolve_selection`]: the endpoints are not fetched.
pub fn has_range_selection<P: CellProvider>(provider: &P, cell: &P::Element) -> bool {
    provider
        .selection_container(cell)
        .map(|container| provider.selected_item_count(&container) > 1)
        .unwrap_or(false)
}

/// Resolve the selection state for a cell
pub fn resolve_selection<P: CellProvider>(provider: &P, cell: &P::Element) -> SelectionState {
    match try_resolve(provider, cell) {
        Ok(state) => state,
        Err(e) => {
            tracing::debug!("Selection treated as absent: {e}");
            SelectionState::NoSelection
        }
    }
}

fn try_resolve<P: CellProvider>(provider: &P, cell: &P::Element) -> Result<SelectionState> {
    let container = navigate(
        Relation::SelectionContainer,
        provider.selection_container(cell),
    )?;

    let count = provider.selected_item_count(&container);
    tracing::trace!("Selection container reports {count} selected item(s)");
    if count <= 1 {
        return Ok(SelectionState::NoSelection);
    }

    let first = navigate(
        Relation::FirstSelectedItem,
        provider.first_selected_item(&container),
    )?;
    let last = navigate(
        Relation::LastSelectedItem,
        provider.last_selected_item(&container),
    )?;

    Ok(SelectionState::RangeSelection {
        first: endpoint(provider, &first),
        last: endpoint(provider, &last),
    })
}

fn endpoint<P: CellProvider>(provider: &P, item: &P::Element) -> SelectionEndpoint {
    SelectionEndpoint {
        address: provider.address(item).unwrap_or_default(),
        value: provider.displayed_value(item).unwrap_or_default(),
    }
}
