//! End-to-end tests for cellsense-core.
//!
//! Each test assembles the exact grid it needs in a `MemoryProvider`, then
//! asks `CellFacts` the consumer queries and checks the answers.

mod common;
mod queries;

// Re-export common utilities for submodules
pub use common::*;
