//! The capability interface the fact derivation consumes.
//!
//! A [`CellProvider`] wraps a platform accessibility tree. It answers property
//! queries, hands out text ranges, and navigates between elements. Element and
//! range handles are only valid for the duration of one consumer query and must
//! not be retained past it.
//!
//! Every accessor returns `Option`: "unsupported" and "no such relation" are
//! ordinary answers, not failures.

use std::fmt;

use crate::error::{Error, Result};
use crate::property::{PropertyId, PropertyValue};
use crate::state::StateSet;

/// Accessible role of an element, as far as the fact derivation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// A grid cell
    TableCell,
    /// A tabular grouping: the sheet grid itself, or a data table defined on it
    Table,
    /// The worksheet element that carries sheet-level properties
    Sheet,
    #[default]
    Other,
}

/// Navigation relations between elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Parent,
    Next,
    SelectionContainer,
    FirstSelectedItem,
    LastSelectedItem,
    /// The element's document text range
    TextRange,
    /// The first visible sub-range of a text range
    VisibleRange,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Relation::Parent => "parent",
            Relation::Next => "next",
            Relation::SelectionContainer => "selection container",
            Relation::FirstSelectedItem => "first selected item",
            Relation::LastSelectedItem => "last selected item",
            Relation::TextRange => "text range",
            Relation::VisibleRange => "visible range",
        };
        f.write_str(name)
    }
}

/// Property query and navigation over a platform accessibility tree
pub trait CellProvider {
    /// Handle to an element in the tree
    type Element: Clone;
    /// Handle to a text range within an element
    type TextRange;

    /// Look up a property; `None` when the provider does not support it
    fn property(&self, element: &Self::Element, id: PropertyId) -> Option<PropertyValue>;

    /// The element's document text range; `None` without a text capability
    fn text_range(&self, element: &Self::Element) -> Option<Self::TextRange>;

    /// Visible sub-ranges of a range, in document order
    fn visible_ranges(&self, range: &Self::TextRange) -> Vec<Self::TextRange>;

    /// Text of a range, truncated to `max_length` characters when given
    fn text(&self, range: &Self::TextRange, max_length: Option<usize>) -> String;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The next element in reading order
    fn next(&self, element: &Self::Element) -> Option<Self::Element>;

    fn role(&self, element: &Self::Element) -> Role;

    /// The enclosing selectable region of an element
    fn selection_container(&self, element: &Self::Element) -> Option<Self::Element>;

    fn selected_item_count(&self, container: &Self::Element) -> usize;

    fn first_selected_item(&self, container: &Self::Element) -> Option<Self::Element>;

    fn last_selected_item(&self, container: &Self::Element) -> Option<Self::Element>;

    /// Address label of a cell (its accessible name)
    fn address(&self, element: &Self::Element) -> Option<String>;

    /// Displayed value of a cell
    fn displayed_value(&self, element: &Self::Element) -> Option<String>;

    /// Status text the generic layer reports as the description
    fn item_status(&self, element: &Self::Element) -> Option<String>;

    /// States already computed by the generic accessible-object layer
    fn base_states(&self, element: &Self::Element) -> StateSet;
}

/// Turn an optional relation target into a [`Result`]
pub fn navigate<T>(relation: Relation, target: Option<T>) -> Result<T> {
    target.ok_or(Error::NavigationUnavailable(relation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate() {
        assert_eq!(navigate(Relation::Next, Some(3)), Ok(3));
        assert_eq!(
            navigate::<u32>(Relation::Parent, None),
            Err(Error::NavigationUnavailable(Relation::Parent))
        );
    }
}
