//! Error types for cellsense-core

use thiserror::Error;

use crate::property::PropertyId;
use crate::provider::Relation;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving cell facts
///
/// None of these are fatal to a consumer query: the fact derivation
/// recovers from each of them by omitting the affected fact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The provider has no value for the requested property
    #[error("Property {0} is not supported by the provider")]
    UnsupportedProperty(PropertyId),

    /// A navigation relation does not exist for the element
    #[error("Relation {0} is unavailable")]
    NavigationUnavailable(Relation),

    /// A property value does not have the expected shape
    #[error("Malformed value for {property}: expected {expected}, got {actual}")]
    MalformedValue {
        property: PropertyId,
        expected: &'static str,
        actual: String,
    },

    /// No cell with the given address exists in an in-memory grid
    #[error("Unknown cell: {0}")]
    UnknownCell(String),

    /// An in-memory grid could not be assembled
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
}

impl Error {
    /// Create a malformed-value error
    pub fn malformed<S: Into<String>>(
        property: PropertyId,
        expected: &'static str,
        actual: S,
    ) -> Self {
        Error::MalformedValue {
            property,
            expected,
            actual: actual.into(),
        }
    }
}
