//! # cellsense-core
//!
//! Accessibility fact derivation for spreadsheet grid cells.
//!
//! A platform accessibility provider exposes raw, loosely-typed cell properties.
//! This crate turns them into the facts a screen reader speaks:
//! - [`CellFacts`] - value, description, states, coordinate text and appearance
//! - [`CellProvider`] - the property query and navigation capability it consumes
//! - [`AppearanceReport`] - the "describe appearance" text
//! - [`SelectionState`] - single focused cell versus active range selection
//! - [`MemoryProvider`] - an in-memory provider for tests and fixtures
//!
//! Every query is computed fresh from the provider. Unsupported or malformed
//! properties shorten a report; they never fail a query.
//!
//! ## Example
//!
//! ```rust
//! use cellsense_core::{CellFacts, MemoryProvider, PropertyId, State};
//!
//! let mut grid = MemoryProvider::new();
//! let sheet = grid.add_sheet("Sheet1");
//! let table = grid.add_table(sheet);
//! let a1 = grid.add_cell(Some(table), "\"A\"1");
//! let b1 = grid.add_cell(Some(table), "\"B\"1");
//! grid.set_truncated_text(a1, "Quarterly revenue by region", "Quarterly");
//! grid.set_text(b1, "");
//! grid.set_property(a1, PropertyId::CellFormula, "=UPPER(C1)");
//!
//! let facts = CellFacts::new(&grid);
//! assert_eq!(facts.coordinate_text(&a1), "A1");
//!
//! let states = facts.states(&a1);
//! assert!(states.contains(State::Overflowing));
//! assert!(states.contains(State::HasFormula));
//! ```

pub mod appearance;
pub mod cell;
pub mod color;
pub mod coordinates;
pub mod error;
pub mod memory;
pub mod options;
pub mod overflow;
pub mod property;
pub mod provider;
pub mod selection;
pub mod state;

// Re-exports for convenience
pub use appearance::{AppearanceFacts, AppearanceReport, CellSize, FillType, Sides};
pub use cell::CellFacts;
pub use color::Rgb;
pub use error::{Error, Result};
pub use memory::{ElementId, MemoryProvider, MemoryRange};
pub use options::FactOptions;
pub use overflow::Truncation;
pub use property::{PropertyId, PropertyValue};
pub use provider::{CellProvider, Relation, Role};
pub use selection::{SelectionEndpoint, SelectionState};
pub use state::{State, StateSet};
