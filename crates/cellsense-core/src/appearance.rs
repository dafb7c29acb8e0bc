//! Cell appearance facts and the "describe appearance" report
//!
//! [`AppearanceFacts`] gathers every appearance property the provider supports
//! into independently optional fields. [`AppearanceReport`] renders them as
//! ordered, human-readable lines:
//!
//! 1. width, height
//! 2. rotation
//! 3. outline color, outline thickness
//! 4. fill color, fill type
//! 5. number format
//! 6. data validation flag and prompt
//! 7. conditional formatting flag
//! 8. gridline visibility
//!
//! A fact the provider does not support, or reports in an unusable shape, is
//! left out of the report without a placeholder.

use std::fmt;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::options::FactOptions;
use crate::property::{self, PropertyId, PropertyValue};
use crate::provider::{navigate, CellProvider, Relation, Role};

/// A value per cell edge, in top/bottom/left/right order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides<T> {
    pub top: T,
    pub bottom: T,
    pub left: T,
    pub right: T,
}

impl<T> Sides<T> {
    /// Build from a `[top, bottom, left, right]` array
    pub fn from_array([top, bottom, left, right]: [T; 4]) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Apply `f` to every side
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Sides<U> {
        Sides {
            top: f(self.top),
            bottom: f(self.bottom),
            left: f(self.left),
            right: f(self.right),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Sides<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={}, bottom={}, left={}, right={}",
            self.top, self.bottom, self.left, self.right
        )
    }
}

/// Cell fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillType {
    None,
    Color,
    Gradient,
    Picture,
    Pattern,
}

impl FillType {
    /// All fill types, indexed by their raw value
    pub const ALL: [FillType; 5] = [
        FillType::None,
        FillType::Color,
        FillType::Gradient,
        FillType::Picture,
        FillType::Pattern,
    ];

    /// Decode the provider's integer.
    ///
    /// Values outside the enumeration are a [`Error::MalformedValue`], which
    /// callers can tell apart from an unsupported property.
    pub fn from_raw(raw: i64) -> Result<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::malformed(PropertyId::FillType, "fill type 0-4", raw.to_string()))
    }

    /// Spoken label
    pub fn label(&self) -> &'static str {
        match self {
            FillType::None => "none",
            FillType::Color => "color",
            FillType::Gradient => "gradient",
            FillType::Picture => "picture",
            FillType::Pattern => "pattern",
        }
    }
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cell dimensions in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

/// Appearance properties of one cell, each independently optional
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppearanceFacts {
    pub size: Option<CellSize>,
    /// Degrees
    pub rotation: Option<f64>,
    pub outline_color: Option<Sides<Rgb>>,
    pub outline_thickness: Option<Sides<f64>>,
    pub fill_color: Option<Rgb>,
    pub fill_type: Option<FillType>,
    /// Only set when non-empty
    pub number_format: Option<String>,
    pub has_data_validation: bool,
    /// Only set when non-empty
    pub data_validation_prompt: Option<String>,
    pub has_conditional_formatting: bool,
    pub gridlines_visible: bool,
}

impl AppearanceFacts {
    /// Query the provider for every appearance property of `cell`
    pub fn collect<P: CellProvider>(provider: &P, cell: &P::Element, options: &FactOptions) -> Self {
        let query = |id: PropertyId| provider.property(cell, id);

        Self {
            size: recover(size(query(PropertyId::Size))),
            rotation: recover(property::require_f64(
                PropertyId::Rotation,
                query(PropertyId::Rotation),
            )),
            outline_color: recover(outline_color(query(PropertyId::OutlineColor))),
            outline_thickness: recover(
                property::require_numbers::<4>(
                    PropertyId::OutlineThickness,
                    query(PropertyId::OutlineThickness),
                )
                .map(Sides::from_array),
            ),
            fill_color: recover(fill_color(query(PropertyId::FillColor))),
            fill_type: recover(
                property::require_i64(PropertyId::FillType, query(PropertyId::FillType))
                    .and_then(FillType::from_raw),
            ),
            number_format: recover(non_empty_string(
                PropertyId::CellNumberFormat,
                query(PropertyId::CellNumberFormat),
            )),
            has_data_validation: is_set(query(PropertyId::HasDataValidation)),
            data_validation_prompt: recover(non_empty_string(
                PropertyId::DataValidationPrompt,
                query(PropertyId::DataValidationPrompt),
            )),
            has_conditional_formatting: is_set(query(PropertyId::HasConditionalFormatting)),
            gridlines_visible: recover(gridlines_visible(provider, cell, options))
                .unwrap_or(false),
        }
    }
}

/// The text surfaced by the "describe appearance" action
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppearanceReport {
    lines: Vec<String>,
}

impl AppearanceReport {
    /// Title for the message presenting the report
    pub const TITLE: &'static str = "Cell Appearance";

    /// Render facts in the fixed report order
    pub fn from_facts(facts: &AppearanceFacts) -> Self {
        let mut lines = Vec::new();

        if let Some(size) = facts.size {
            lines.push(format!("Cell width: {:.1} pt", size.width));
            lines.push(format!("Cell height: {:.1} pt", size.height));
        }
        if let Some(rotation) = facts.rotation {
            lines.push(format!("Rotation: {} degrees", rotation));
        }
        if let Some(colors) = &facts.outline_color {
            lines.push(format!("Outline color: {}", colors));
        }
        if let Some(thickness) = &facts.outline_thickness {
            lines.push(format!("Outline thickness: {}", thickness));
        }
        if let Some(color) = facts.fill_color {
            lines.push(format!("Fill color: {}", color));
        }
        if let Some(fill_type) = facts.fill_type {
            lines.push(format!("Fill type: {}", fill_type.label()));
        }
        if let Some(format) = &facts.number_format {
            lines.push(format!("Number format: {}", format));
        }
        if facts.has_data_validation {
            lines.push("Has data validation".to_string());
        }
        if let Some(prompt) = &facts.data_validation_prompt {
            lines.push(format!("Data validation prompt: {}", prompt));
        }
        if facts.has_conditional_formatting {
            lines.push("Has conditional formatting".to_string());
        }
        if facts.gridlines_visible {
            lines.push("Gridlines are visible".to_string());
        }

        Self { lines }
    }

    /// Collect and render the report for a cell
    pub fn build<P: CellProvider>(provider: &P, cell: &P::Element, options: &FactOptions) -> Self {
        Self::from_facts(&AppearanceFacts::collect(provider, cell, options))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for AppearanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Whether the sheet owning `cell` shows gridlines.
///
/// The property lives on the sheet, which sits above one or more tabular
/// wrappers (the grid, plus any data table defined on the sheet).
pub fn gridlines_visible<P: CellProvider>(
    provider: &P,
    cell: &P::Element,
    options: &FactOptions,
) -> Result<bool> {
    let mut owner = navigate(Relation::Parent, provider.parent(cell))?;
    let mut ascended = 0;
    while provider.role(&owner) == Role::Table {
        if ascended == options.max_grid_ascent {
            tracing::debug!("Gave up looking for the sheet after {ascended} table wrapper(s)");
            return Err(Error::NavigationUnavailable(Relation::Parent));
        }
        owner = navigate(Relation::Parent, provider.parent(&owner))?;
        ascended += 1;
    }
    tracing::trace!("Sheet found above {ascended} table wrapper(s)");

    let value = property::require(
        PropertyId::AreGridlinesVisible,
        provider.property(&owner, PropertyId::AreGridlinesVisible),
    )?;
    Ok(value.is_truthy())
}

fn recover<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Omitting appearance fact: {e}");
            None
        }
    }
}

fn is_set(value: Option<PropertyValue>) -> bool {
    value.map(|v| v.is_truthy()).unwrap_or(false)
}

fn size(value: Option<PropertyValue>) -> Result<CellSize> {
    let [width, height] = property::require_numbers::<2>(PropertyId::Size, value)?;
    Ok(CellSize { width, height })
}

fn colorref(id: PropertyId, raw: i64) -> Result<Rgb> {
    u32::try_from(raw)
        .map(Rgb::from_colorref)
        .map_err(|_| Error::malformed(id, "COLORREF", raw.to_string()))
}

fn outline_color(value: Option<PropertyValue>) -> Result<Sides<Rgb>> {
    let raw = property::require_ints::<4>(PropertyId::OutlineColor, value)?;
    let mut colors = [Rgb::BLACK; 4];
    for (slot, raw) in colors.iter_mut().zip(raw) {
        *slot = colorref(PropertyId::OutlineColor, raw)?;
    }
    Ok(Sides::from_array(colors))
}

fn fill_color(value: Option<PropertyValue>) -> Result<Rgb> {
    let raw = property::require_i64(PropertyId::FillColor, value)?;
    colorref(PropertyId::FillColor, raw)
}

fn non_empty_string(id: PropertyId, value: Option<PropertyValue>) -> Result<String> {
    let s = property::require_string(id, value)?;
    if s.is_empty() {
        return Err(Error::UnsupportedProperty(id));
    }
    Ok(s)
}
