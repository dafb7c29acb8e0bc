//! Truncation classification
//!
//! A cell's text is truncated when its first visible range holds fewer
//! characters than its whole document range. Truncated text is then either
//! *overflowing* (it spills into an empty neighbor and stays readable) or
//! *cropped* (the next cell has content of its own, so the rest is hidden).

use crate::error::{Error, Result};
use crate::options::FactOptions;
use crate::provider::{navigate, CellProvider, Relation};
use crate::state::State;

/// How a cell's displayed text relates to its full text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// All text is visible, or visibility cannot be determined
    None,
    /// Truncated, continuing into an empty neighbor
    Overflowing,
    /// Truncated and hidden by the neighbor's content
    Cropped,
}

impl Truncation {
    /// The state this classification contributes, if any
    pub fn state(&self) -> Option<State> {
        match self {
            Truncation::None => None,
            Truncation::Overflowing => Some(State::Overflowing),
            Truncation::Cropped => Some(State::Cropped),
        }
    }
}

/// Classify truncation of a cell's text
pub fn classify<P: CellProvider>(
    provider: &P,
    cell: &P::Element,
    options: &FactOptions,
) -> Truncation {
    match is_truncated(provider, cell) {
        Ok(true) => {}
        Ok(false) => return Truncation::None,
        Err(e) => {
            tracing::debug!("Treating text as fully visible: {e}");
            return Truncation::None;
        }
    }

    let truncation = if next_cell_has_content(provider, cell, options) {
        Truncation::Cropped
    } else {
        Truncation::Overflowing
    };
    tracing::trace!("Truncated text classified as {truncation:?}");
    truncation
}

/// Whether the visible text is shorter than the full text.
///
/// Both ranges are read whole; a length cap would make every long cell look
/// fully visible.
pub fn is_truncated<P: CellProvider>(provider: &P, cell: &P::Element) -> Result<bool> {
    let range = navigate(Relation::TextRange, provider.text_range(cell))?;
    let visible = provider
        .visible_ranges(&range)
        .into_iter()
        .next()
        .ok_or(Error::NavigationUnavailable(Relation::VisibleRange))?;

    let visible_len = provider.text(&visible, None).chars().count();
    let full_len = provider.text(&range, None).chars().count();
    Ok(visible_len < full_len)
}

/// Whether the next cell in reading order has text of its own.
///
/// A missing neighbor, or one without a text capability, counts as empty.
/// Only the first [`FactOptions::text_length_limit`] characters are read.
pub fn next_cell_has_content<P: CellProvider>(
    provider: &P,
    cell: &P::Element,
    options: &FactOptions,
) -> bool {
    provider
        .next(cell)
        .and_then(|next| provider.text_range(&next))
        .map(|range| !provider.text(&range, options.content_check_limit()).is_empty())
        .unwrap_or(false)
}
