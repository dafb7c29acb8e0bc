//! Loosely-typed property values reported by an accessibility provider.
//!
//! Providers answer property queries with whatever the underlying automation
//! layer hands back: a boolean, an integer, a double, a string, an array of
//! any of those, or nothing at all. [`PropertyValue`] carries that shape and
//! the `require_*` helpers turn it into a typed [`Result`], so that an absent
//! property and a mistyped one stay distinguishable.

use std::fmt;

use crate::error::{Error, Result};

/// Identifiers for the cell properties the fact derivation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyId {
    /// Four COLORREF values: top, bottom, left, right
    OutlineColor,
    /// Four numbers: top, bottom, left, right
    OutlineThickness,
    /// A single COLORREF value
    FillColor,
    /// Integer in the [`FillType`](crate::appearance::FillType) enumeration
    FillType,
    /// Degrees, floating point
    Rotation,
    /// Two numbers: width and height in points
    Size,
    /// Formula text, empty when the cell holds a constant
    CellFormula,
    HasDataValidationDropdown,
    CellNumberFormat,
    HasDataValidation,
    DataValidationPrompt,
    HasConditionalFormatting,
    /// Carried by the sheet element, not by the cell
    AreGridlinesVisible,
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A property value as reported by the provider
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    /// The provider returned a value, but it is empty
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Name of the variant, used in malformed-value diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Empty => "empty",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Double(_) => "double",
            PropertyValue::String(_) => "string",
            PropertyValue::Array(_) => "array",
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value; integers widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Double(d) => Some(*d),
            PropertyValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Truthiness of a flag-like property.
    ///
    /// Providers report flags inconsistently (bool, 0/1, non-empty string),
    /// so anything non-zero and non-empty counts as set.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Empty => false,
            PropertyValue::Bool(b) => *b,
            PropertyValue::Int(n) => *n != 0,
            PropertyValue::Double(d) => *d != 0.0,
            PropertyValue::String(s) => !s.is_empty(),
            PropertyValue::Array(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Empty => Ok(()),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(n) => write!(f, "{}", n),
            PropertyValue::Double(d) => write!(f, "{}", d),
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(d: f64) -> Self {
        PropertyValue::Double(d)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(items: Vec<T>) -> Self {
        PropertyValue::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Unwrap a provider answer, mapping "no value" to [`Error::UnsupportedProperty`]
pub fn require(id: PropertyId, value: Option<PropertyValue>) -> Result<PropertyValue> {
    value.ok_or(Error::UnsupportedProperty(id))
}

/// Require a floating-point (or integer) value
pub fn require_f64(id: PropertyId, value: Option<PropertyValue>) -> Result<f64> {
    let value = require(id, value)?;
    let n = value
        .as_f64()
        .ok_or_else(|| Error::malformed(id, "number", value.kind()))?;
    finite(id, n)
}

fn finite(id: PropertyId, n: f64) -> Result<f64> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(Error::malformed(id, "finite number", n.to_string()))
    }
}

/// Require an integer value
pub fn require_i64(id: PropertyId, value: Option<PropertyValue>) -> Result<i64> {
    let value = require(id, value)?;
    value
        .as_i64()
        .ok_or_else(|| Error::malformed(id, "int", value.kind()))
}

/// Require a string value
pub fn require_string(id: PropertyId, value: Option<PropertyValue>) -> Result<String> {
    match require(id, value)? {
        PropertyValue::String(s) => Ok(s),
        other => Err(Error::malformed(id, "string", other.kind())),
    }
}

/// Require an array of exactly `N` numbers
pub fn require_numbers<const N: usize>(
    id: PropertyId,
    value: Option<PropertyValue>,
) -> Result<[f64; N]> {
    let value = require(id, value)?;
    let items = value
        .as_array()
        .ok_or_else(|| Error::malformed(id, "array", value.kind()))?;
    if items.len() != N {
        return Err(Error::malformed(
            id,
            "array of fixed length",
            format!("array of {}", items.len()),
        ));
    }

    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        let n = item
            .as_f64()
            .ok_or_else(|| Error::malformed(id, "number", item.kind()))?;
        *slot = finite(id, n)?;
    }
    Ok(out)
}

/// Require an array of exactly `N` integers
pub fn require_ints<const N: usize>(
    id: PropertyId,
    value: Option<PropertyValue>,
) -> Result<[i64; N]> {
    let value = require(id, value)?;
    let items = value
        .as_array()
        .ok_or_else(|| Error::malformed(id, "array", value.kind()))?;
    if items.len() != N {
        return Err(Error::malformed(
            id,
            "array of fixed length",
            format!("array of {}", items.len()),
        ));
    }

    let mut out = [0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item
            .as_i64()
            .ok_or_else(|| Error::malformed(id, "int", item.kind()))?;
    }
    Ok(out)
}
