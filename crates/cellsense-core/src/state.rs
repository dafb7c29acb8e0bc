//! Accessible state flags and their derivation for cells

use std::collections::BTreeSet;
use std::fmt;

use crate::options::FactOptions;
use crate::overflow;
use crate::property::PropertyId;
use crate::provider::CellProvider;

/// A named accessible state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum State {
    Focusable,
    Focused,
    Selectable,
    Selected,
    ReadOnly,
    Invisible,
    Offscreen,
    /// Truncated text that visibly spills into an empty neighbor
    Overflowing,
    /// Truncated text hidden behind a neighbor's content
    Cropped,
    HasFormula,
    /// A data-validation dropdown is available
    HasPopup,
}

impl State {
    /// Spoken label for the state
    pub fn label(&self) -> &'static str {
        match self {
            State::Focusable => "focusable",
            State::Focused => "focused",
            State::Selectable => "selectable",
            State::Selected => "selected",
            State::ReadOnly => "read only",
            State::Invisible => "invisible",
            State::Offscreen => "off screen",
            State::Overflowing => "overflowing",
            State::Cropped => "cropped",
            State::HasFormula => "has formula",
            State::HasPopup => "has popup",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An unordered set of states
///
/// Backed by a `BTreeSet` so iteration and display are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateSet {
    states: BTreeSet<State>,
}

impl StateSet {
    /// Create an empty state set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state; returns false if it was already present
    pub fn insert(&mut self, state: State) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: State) -> bool {
        self.states.contains(&state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.states.iter().copied()
    }
}

impl FromIterator<State> for StateSet {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl Extend<State> for StateSet {
    fn extend<I: IntoIterator<Item = State>>(&mut self, iter: I) {
        self.states.extend(iter);
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", state)?;
        }
        Ok(())
    }
}

/// Compose the full state set of a cell.
///
/// Starts from the provider's base states and only ever adds: at most one
/// of overflowing/cropped, then has-formula and has-popup.
pub fn derive_states<P: CellProvider>(
    provider: &P,
    cell: &P::Element,
    options: &FactOptions,
) -> StateSet {
    let mut states = provider.base_states(cell);

    if let Some(state) = overflow::classify(provider, cell, options).state() {
        states.insert(state);
    }
    if flag(provider, cell, PropertyId::CellFormula) {
        states.insert(State::HasFormula);
    }
    if flag(provider, cell, PropertyId::HasDataValidationDropdown) {
        states.insert(State::HasPopup);
    }
    states
}

fn flag<P: CellProvider>(provider: &P, cell: &P::Element, id: PropertyId) -> bool {
    provider
        .property(cell, id)
        .map(|value| value.is_truthy())
        .unwrap_or(false)
}
