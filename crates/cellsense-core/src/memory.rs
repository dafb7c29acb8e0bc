//! In-memory provider
//!
//! A small arena-backed accessibility tree implementing [`CellProvider`].
//! Elements are added through builder methods; cells added under the same
//! parent are chained in insertion order for [`CellProvider::next`].
//!
//! ## Example
//!
//! ```rust
//! use cellsense_core::{CellFacts, MemoryProvider, PropertyId};
//!
//! let mut grid = MemoryProvider::new();
//! let sheet = grid.add_sheet("Sheet1");
//! let table = grid.add_table(sheet);
//! let a1 = grid.add_cell(Some(table), "A1");
//! grid.set_property(a1, PropertyId::Size, vec![64.0, 15.0]);
//!
//! let facts = CellFacts::new(&grid);
//! assert_eq!(facts.coordinate_text(&a1), "A1");
//! ```

use ahash::AHashMap;

use crate::error::{Error, Result};
use crate::property::{PropertyId, PropertyValue};
use crate::provider::{CellProvider, Role};
use crate::state::{State, StateSet};

/// Handle to an element of a [`MemoryProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// A text range: the text it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRange {
    text: String,
    visible: Vec<String>,
}

#[derive(Debug, Clone, Default)]
struct MemoryElement {
    role: Role,
    address: Option<String>,
    displayed_value: Option<String>,
    item_status: Option<String>,
    base_states: StateSet,
    text: Option<MemoryRange>,
    properties: AHashMap<PropertyId, PropertyValue>,
    parent: Option<ElementId>,
    next: Option<ElementId>,
    last_child: Option<ElementId>,
    selected: Vec<ElementId>,
    /// Selected items counted but never handed out (virtualized rows)
    unrealized: usize,
}

/// An accessibility tree held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    elements: Vec<MemoryElement>,
}

impl MemoryProvider {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a worksheet element; `name` becomes its address label
    pub fn add_sheet(&mut self, name: &str) -> ElementId {
        self.push(MemoryElement {
            role: Role::Sheet,
            address: Some(name.to_string()),
            ..Default::default()
        })
    }

    /// Add a tabular grouping (the sheet grid or a data table) under `parent`
    pub fn add_table(&mut self, parent: ElementId) -> ElementId {
        self.push(MemoryElement {
            role: Role::Table,
            parent: Some(parent),
            ..Default::default()
        })
    }

    /// Add a cell, chained after the previous cell of the same parent
    pub fn add_cell(&mut self, parent: Option<ElementId>, address: &str) -> ElementId {
        let id = self.push(MemoryElement {
            role: Role::TableCell,
            address: Some(address.to_string()),
            parent,
            ..Default::default()
        });

        if let Some(parent) = parent {
            if let Some(previous) = self.elements[parent.0].last_child.replace(id) {
                self.elements[previous.0].next = Some(id);
            }
        }
        id
    }

    /// Find a cell by its exact address label
    pub fn cell(&self, address: &str) -> Result<ElementId> {
        self.elements
            .iter()
            .position(|e| e.role == Role::TableCell && e.address.as_deref() == Some(address))
            .map(ElementId)
            .ok_or_else(|| Error::UnknownCell(address.to_string()))
    }

    pub fn set_displayed_value(&mut self, id: ElementId, value: &str) {
        self.elements[id.0].displayed_value = Some(value.to_string());
    }

    pub fn set_item_status(&mut self, id: ElementId, status: &str) {
        self.elements[id.0].item_status = Some(status.to_string());
    }

    pub fn add_base_state(&mut self, id: ElementId, state: State) {
        self.elements[id.0].base_states.insert(state);
    }

    /// Give the element a text capability whose whole text is visible
    pub fn set_text(&mut self, id: ElementId, text: &str) {
        self.elements[id.0].text = Some(MemoryRange {
            text: text.to_string(),
            visible: vec![text.to_string()],
        });
    }

    /// Give the element a text capability with only `visible` showing
    pub fn set_truncated_text(&mut self, id: ElementId, text: &str, visible: &str) {
        self.elements[id.0].text = Some(MemoryRange {
            text: text.to_string(),
            visible: vec![visible.to_string()],
        });
    }

    /// Give the element a text capability that has no visible sub-range
    pub fn set_hidden_text(&mut self, id: ElementId, text: &str) {
        self.elements[id.0].text = Some(MemoryRange {
            text: text.to_string(),
            visible: Vec::new(),
        });
    }

    /// Set a property value
    pub fn set_property<V: Into<PropertyValue>>(&mut self, id: ElementId, prop: PropertyId, value: V) {
        self.elements[id.0].properties.insert(prop, value.into());
    }

    /// Mark `items` as the selected items of `container`, in order
    pub fn select(&mut self, container: ElementId, items: &[ElementId]) -> Result<()> {
        let len = self.elements.len();
        self.check_container(container)?;
        if let Some(missing) = items.iter().find(|item| item.0 >= len) {
            return Err(Error::InvalidFixture(format!(
                "selected element {} does not exist",
                missing.0
            )));
        }
        let element = &mut self.elements[container.0];
        element.selected = items.to_vec();
        element.unrealized = 0;
        Ok(())
    }

    /// Count `count` more selected items after the realized ones without
    /// exposing them; the container then has no last selected item.
    pub fn select_unrealized(&mut self, container: ElementId, count: usize) -> Result<()> {
        self.check_container(container)?;
        self.elements[container.0].unrealized += count;
        Ok(())
    }

    fn check_container(&self, container: ElementId) -> Result<()> {
        if container.0 >= self.elements.len() {
            return Err(Error::InvalidFixture(format!(
                "selection container {} does not exist",
                container.0
            )));
        }
        Ok(())
    }

    fn push(&mut self, element: MemoryElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    fn get(&self, id: &ElementId) -> Option<&MemoryElement> {
        self.elements.get(id.0)
    }
}

impl CellProvider for MemoryProvider {
    type Element = ElementId;
    type TextRange = MemoryRange;

    fn property(&self, element: &ElementId, id: PropertyId) -> Option<PropertyValue> {
        self.get(element)?.properties.get(&id).cloned()
    }

    fn text_range(&self, element: &ElementId) -> Option<MemoryRange> {
        self.get(element)?.text.clone()
    }

    fn visible_ranges(&self, range: &MemoryRange) -> Vec<MemoryRange> {
        range
            .visible
            .iter()
            .map(|text| MemoryRange {
                text: text.clone(),
                visible: vec![text.clone()],
            })
            .collect()
    }

    fn text(&self, range: &MemoryRange, max_length: Option<usize>) -> String {
        match max_length {
            Some(n) => range.text.chars().take(n).collect(),
            None => range.text.clone(),
        }
    }

    fn parent(&self, element: &ElementId) -> Option<ElementId> {
        self.get(element)?.parent
    }

    fn next(&self, element: &ElementId) -> Option<ElementId> {
        self.get(element)?.next
    }

    fn role(&self, element: &ElementId) -> Role {
        self.get(element).map(|e| e.role).unwrap_or_default()
    }

    fn selection_container(&self, element: &ElementId) -> Option<ElementId> {
        let parent = self.parent(element)?;
        match self.role(&parent) {
            Role::Table | Role::Sheet => Some(parent),
            _ => None,
        }
    }

    fn selected_item_count(&self, container: &ElementId) -> usize {
        self.get(container)
            .map(|e| e.selected.len() + e.unrealized)
            .unwrap_or(0)
    }

    fn first_selected_item(&self, container: &ElementId) -> Option<ElementId> {
        self.get(container)?.selected.first().copied()
    }

    fn last_selected_item(&self, container: &ElementId) -> Option<ElementId> {
        let element = self.get(container)?;
        if element.unrealized > 0 {
            return None;
        }
        element.selected.last().copied()
    }

    fn address(&self, element: &ElementId) -> Option<String> {
        self.get(element)?.address.clone()
    }

    fn displayed_value(&self, element: &ElementId) -> Option<String> {
        self.get(element)?.displayed_value.clone()
    }

    fn item_status(&self, element: &ElementId) -> Option<String> {
        self.get(element)?.item_status.clone()
    }

    fn base_states(&self, element: &ElementId) -> StateSet {
        self.get(element)
            .map(|e| e.base_states.clone())
            .unwrap_or_default()
    }
}
