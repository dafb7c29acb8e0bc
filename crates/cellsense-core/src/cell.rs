//! Consumer-facing cell facts
//!
//! [`CellFacts`] answers the queries an accessibility layer asks about a grid
//! cell. Each query goes back to the provider; nothing is cached between calls.

use crate::appearance::{AppearanceFacts, AppearanceReport};
use crate::coordinates;
use crate::options::FactOptions;
use crate::provider::{CellProvider, Role};
use crate::selection::{self, SelectionState};
use crate::state::{self, StateSet};

/// Fact derivation over a provider
#[derive(Debug, Clone)]
pub struct CellFacts<'p, P: CellProvider> {
    provider: &'p P,
    options: FactOptions,
}

impl<'p, P: CellProvider> CellFacts<'p, P> {
    /// Create with default options
    pub fn new(provider: &'p P) -> Self {
        Self::with_options(provider, FactOptions::default())
    }

    pub fn with_options(provider: &'p P, options: FactOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &FactOptions {
        &self.options
    }

    /// Cells are always reported as table cells
    pub fn role(&self) -> Role {
        Role::TableCell
    }

    /// Cells carry no accessible name; the address is spoken through
    /// [`coordinate_text`](Self::coordinate_text) instead.
    pub fn name(&self) -> &'static str {
        ""
    }

    /// The cell's accessible value.
    ///
    /// `None` while a range selection is active: a range has no single value.
    pub fn value(&self, cell: &P::Element) -> Option<String> {
        if selection::has_range_selection(self.provider, cell) {
            return None;
        }
        self.provider.displayed_value(cell)
    }

    /// The cell's accessible description, suppressed like [`value`](Self::value)
    pub fn description(&self, cell: &P::Element) -> Option<String> {
        if selection::has_range_selection(self.provider, cell) {
            return None;
        }
        self.provider.item_status(cell)
    }

    pub fn selection(&self, cell: &P::Element) -> SelectionState {
        selection::resolve_selection(self.provider, cell)
    }

    pub fn states(&self, cell: &P::Element) -> StateSet {
        state::derive_states(self.provider, cell, &self.options)
    }

    pub fn coordinate_text(&self, cell: &P::Element) -> String {
        coordinates::coordinate_text(self.provider, cell, &self.options)
    }

    pub fn appearance_facts(&self, cell: &P::Element) -> AppearanceFacts {
        AppearanceFacts::collect(self.provider, cell, &self.options)
    }

    pub fn appearance(&self, cell: &P::Element) -> AppearanceReport {
        AppearanceReport::build(self.provider, cell, &self.options)
    }

    /// The appearance report as newline-joined text
    pub fn appearance_report(&self, cell: &P::Element) -> String {
        self.appearance(cell).to_string()
    }
}
