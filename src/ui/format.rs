//! Fixed-width text formatting
//!
//! Every carriage field occupies a fixed number of columns: long values are
//! cut short with an ellipsis, short ones are padded with spaces.

use thiserror::Error;

/// Marker appended to truncated values
pub const ELLIPSIS: &str = "...";

const ELLIPSIS_LEN: usize = 3;

/// Errors from building a fixed-width formatter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("field width {0} is too narrow, need at least 3 columns")]
    InvalidWidth(usize),
}

/// A column count wide enough to hold the ellipsis marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldWidth(usize);

impl FieldWidth {
    /// Width of each text field on a carriage
    pub const CARRIAGE: FieldWidth = FieldWidth(40);

    /// Validate a width; anything below 3 columns cannot show a truncation
    pub fn new(width: usize) -> Result<Self, FormatError> {
        if width < ELLIPSIS_LEN {
            return Err(FormatError::InvalidWidth(width));
        }
        Ok(Self(width))
    }

    /// Truncate or pad `input` to exactly this many characters
    ///
    /// Widths are counted in `char`s, so multi-byte text is never split
    /// mid-character.
    pub fn fit(self, input: &str) -> String {
        let len = input.chars().count();
        if len > self.0 {
            let mut out: String = input.chars().take(self.0 - ELLIPSIS_LEN).collect();
            out.push_str(ELLIPSIS);
            out
        } else {
            let mut out = String::with_capacity(input.len() + self.0 - len);
            out.push_str(input);
            out.extend(std::iter::repeat_n(' ', self.0 - len));
            out
        }
    }
}

/// Truncate or pad `input` to `width` characters
pub fn fit_text(input: &str, width: usize) -> Result<String, FormatError> {
    FieldWidth::new(width).map(|w| w.fit(input))
}
