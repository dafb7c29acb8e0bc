//! Fact derivation options

/// The quote character Excel wraps column letters in; always stripped
pub const ADDRESS_QUOTE: char = '"';

/// Options controlling how cell facts are derived
#[derive(Debug, Clone)]
pub struct FactOptions {
    /// Characters stripped from cell addresses in addition to [`ADDRESS_QUOTE`]
    pub quote_chars: Vec<char>,
    /// Maximum number of tabular wrappers walked when looking for the sheet
    pub max_grid_ascent: usize,
    /// Maximum characters read when checking whether the next cell has content
    /// (default: whole range). Truncation itself always compares whole ranges.
    pub text_length_limit: Option<usize>,
}

impl Default for FactOptions {
    fn default() -> Self {
        Self {
            quote_chars: Vec::new(),
            max_grid_ascent: 8,
            text_length_limit: None,
        }
    }
}

impl FactOptions {
    /// Remove the address quote and every configured extra character
    pub fn strip_quotes(&self, address: &str) -> String {
        address
            .chars()
            .filter(|c| *c != ADDRESS_QUOTE && !self.quote_chars.contains(c))
            .collect()
    }

    /// Read limit for the next-cell content check; never below one character
    pub fn content_check_limit(&self) -> Option<usize> {
        self.text_length_limit.map(|n| n.max(1))
    }
}
