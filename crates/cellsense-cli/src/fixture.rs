//! JSON grid fixtures
//!
//! A fixture describes one sheet, the tabular wrappers between the sheet and
//! its cells, and a single row of cells in reading order:
//!
//! ```json
//! {
//!   "sheet": "Budget",
//!   "sheet_properties": { "AreGridlinesVisible": true },
//!   "data_tables": 1,
//!   "cells": [
//!     { "address": "\"A\"1", "value": "Region", "text": "Region" },
//!     { "address": "\"B\"1", "value": "Quarterly revenue by region",
//!       "text": "Quarterly revenue by region", "visible_text": "Quarterly",
//!       "properties": { "CellFormula": "=C1", "Size": [64.0, 15.0] } }
//!   ],
//!   "selection": []
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use cellsense_core::{ElementId, MemoryProvider, PropertyId, PropertyValue, State};
use serde::Deserialize;

/// A sheet and its cells
#[derive(Debug, Clone, Deserialize)]
pub struct GridFixture {
    #[serde(default = "default_sheet")]
    pub sheet: String,
    #[serde(default)]
    pub sheet_properties: BTreeMap<PropertyId, PropertyValue>,
    /// Data tables nested inside the sheet grid
    #[serde(default)]
    pub data_tables: usize,
    pub cells: Vec<CellFixture>,
    /// Addresses of selected cells, first to last
    #[serde(default)]
    pub selection: Vec<String>,
}

/// One cell of a fixture
#[derive(Debug, Clone, Deserialize)]
pub struct CellFixture {
    pub address: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Omit to give the cell no text capability
    #[serde(default)]
    pub text: Option<String>,
    /// Visible prefix of `text`; defaults to the whole text
    #[serde(default)]
    pub visible_text: Option<String>,
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub properties: BTreeMap<PropertyId, PropertyValue>,
}

fn default_sheet() -> String {
    "Sheet1".to_string()
}

impl GridFixture {
    /// Read a fixture from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse fixture '{}'", path.display()))
    }

    /// Assemble the in-memory accessibility tree
    pub fn build(&self) -> cellsense_core::Result<MemoryProvider> {
        let mut grid = MemoryProvider::new();

        let sheet = grid.add_sheet(&self.sheet);
        for (id, value) in &self.sheet_properties {
            grid.set_property(sheet, *id, value.clone());
        }

        let mut container = grid.add_table(sheet);
        for _ in 0..self.data_tables {
            container = grid.add_table(container);
        }

        for cell in &self.cells {
            let id = grid.add_cell(Some(container), &cell.address);
            apply_cell(&mut grid, id, cell);
        }

        if !self.selection.is_empty() {
            let selected = self
                .selection
                .iter()
                .map(|address| grid.cell(address))
                .collect::<cellsense_core::Result<Vec<_>>>()?;
            grid.select(container, &selected)?;
        }

        Ok(grid)
    }
}

fn apply_cell(grid: &mut MemoryProvider, id: ElementId, cell: &CellFixture) {
    if let Some(value) = &cell.value {
        grid.set_displayed_value(id, value);
    }
    if let Some(status) = &cell.status {
        grid.set_item_status(id, status);
    }
    match (&cell.text, &cell.visible_text) {
        (Some(text), Some(visible)) => grid.set_truncated_text(id, text, visible),
        (Some(text), None) => grid.set_text(id, text),
        (None, _) => {}
    }
    for state in &cell.states {
        grid.add_base_state(id, *state);
    }
    for (prop, value) in &cell.properties {
        grid.set_property(id, *prop, value.clone());
    }
}
