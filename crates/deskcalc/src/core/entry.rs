//! The text of the number currently being typed

use std::fmt;

use super::event::DigitKey;

const ZERO: &str = "0";
const NEGATIVE_ZERO: &str = "-0";
const MINUS: char = '-';
const DECIMAL_POINT: char = '.';

/// Entry buffer holding the in-progress number as typed
///
/// Invariants: never empty, at most one decimal point, and no leading zero
/// other than a lone `"0"` or `"-0"` waiting for its next digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
}

impl Default for EntryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBuffer {
    /// Creates a buffer holding `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: ZERO.to_string(),
        }
    }

    /// Creates a buffer from a computed value
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    /// Returns the buffer text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Resets the buffer to `"0"`
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(ZERO);
    }

    /// Returns true for a lone `"0"` or `"-0"`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == ZERO || self.text == NEGATIVE_ZERO
    }

    /// Returns true if the buffer already has a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.text.contains(DECIMAL_POINT)
    }

    /// Appends digits, replacing a lone leading zero
    ///
    /// Zeros typed onto a lone zero are dropped. Returns false when the
    /// press changed nothing.
    pub fn push_digits(&mut self, key: DigitKey) -> bool {
        if self.is_zero() && key.is_zero() {
            return false;
        }
        if !self.is_finite_text() {
            self.reset();
        }
        if self.text == ZERO {
            self.text.clear();
        } else if self.text == NEGATIVE_ZERO {
            self.text.truncate(1);
        }
        self.text.push_str(key.as_str());
        true
    }

    /// Appends a decimal point unless one is already present
    pub fn push_decimal_point(&mut self) -> bool {
        if !self.is_finite_text() {
            self.reset();
        }
        if self.has_decimal_point() {
            return false;
        }
        self.text.push(DECIMAL_POINT);
        true
    }

    /// Adds or removes a single leading minus sign
    pub fn toggle_sign(&mut self) {
        if self.text.starts_with(MINUS) {
            self.text.remove(0);
        } else {
            self.text.insert(0, MINUS);
        }
    }

    /// Parses the buffer as a number
    ///
    /// Text typed through the keypad always parses; `NaN` is only reached
    /// for buffers seeded with a non-finite value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.text.parse().unwrap_or(f64::NAN)
    }

    // Seeded buffers such as "inf" cannot take more digits.
    fn is_finite_text(&self) -> bool {
        self.value().is_finite()
    }
}

impl fmt::Display for EntryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
