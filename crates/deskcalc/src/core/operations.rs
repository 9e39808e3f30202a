//! Binary operators and their display glyphs
//!
//! Arithmetic here is deliberately unguarded: dividing by zero yields an
//! IEEE-754 infinity or NaN, which the formatter renders as text.

use serde::{Deserialize, Serialize};

/// The four desk-calculator operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// Applies the operator with `rhs` read as a percentage
    ///
    /// Add and Subtract take `rhs` percent of `lhs` and add or subtract it
    /// (`200 + 10%` is 220). Multiply and Divide only rescale `rhs` to a
    /// fraction, so `50 × 50%` is 25 and `50 ÷ 50%` is 100.
    #[must_use]
    pub fn apply_percentage(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add | Self::Subtract => self.apply(lhs, lhs * rhs / 100.0),
            Self::Multiply | Self::Divide => self.apply(lhs, rhs / 100.0),
        }
    }
}

/// Glyph lookup supplied by the presentation layer
///
/// The engine only knows operator identities; hosts decide how they look.
pub trait OperatorSymbols {
    /// Returns the glyph shown for `op` on the expression line
    fn symbol(&self, op: Operator) -> &str;

    /// Returns the suffix appended to a percentage operand
    fn percent(&self) -> &str {
        "%"
    }
}

/// Typographic glyphs: `+ − × ÷`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeSymbols;

impl OperatorSymbols for UnicodeSymbols {
    fn symbol(&self, op: Operator) -> &str {
        match op {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "\u{00d7}",
            Operator::Divide => "\u{00f7}",
        }
    }
}

/// Keyboard glyphs: `+ - * /`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiSymbols;

impl OperatorSymbols for AsciiSymbols {
    fn symbol(&self, op: Operator) -> &str {
        match op {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- apply ---

    #[test]
    fn test_apply_add() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), 7.0);
    }

    #[test]
    fn test_apply_subtract() {
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), -2.0);
    }

    #[test]
    fn test_apply_multiply() {
        assert_eq!(Operator::Multiply.apply(-2.0, 3.0), -6.0);
    }

    #[test]
    fn test_apply_divide() {
        assert_eq!(Operator::Divide.apply(20.0, 4.0), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_divided_by_zero_is_nan() {
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    // --- apply_percentage ---

    #[test]
    fn test_percentage_add_takes_share_of_lhs() {
        assert_eq!(Operator::Add.apply_percentage(20.0, 10.0), 22.0);
    }

    #[test]
    fn test_percentage_subtract_takes_share_of_lhs() {
        assert_eq!(Operator::Subtract.apply_percentage(200.0, 25.0), 150.0);
    }

    #[test]
    fn test_percentage_multiply_rescales_rhs_only() {
        assert_eq!(Operator::Multiply.apply_percentage(50.0, 50.0), 25.0);
    }

    #[test]
    fn test_percentage_divide_rescales_rhs_only() {
        assert_eq!(Operator::Divide.apply_percentage(50.0, 50.0), 100.0);
    }

    #[test]
    fn test_percentage_divide_by_zero_percent() {
        assert_eq!(Operator::Divide.apply_percentage(1.0, 0.0), f64::INFINITY);
    }

    // --- symbols ---

    #[test]
    fn test_unicode_symbols() {
        let symbols = UnicodeSymbols;
        assert_eq!(symbols.symbol(Operator::Add), "+");
        assert_eq!(symbols.symbol(Operator::Subtract), "−");
        assert_eq!(symbols.symbol(Operator::Multiply), "×");
        assert_eq!(symbols.symbol(Operator::Divide), "÷");
        assert_eq!(symbols.percent(), "%");
    }

    #[test]
    fn test_ascii_symbols() {
        let symbols = AsciiSymbols;
        let glyphs: Vec<&str> = Operator::ALL.iter().map(|op| symbols.symbol(*op)).collect();
        assert_eq!(glyphs, vec!["+", "-", "*", "/"]);
    }

    #[test]
    fn test_operator_serde_names() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let op: Operator = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }

    proptest! {
        #[test]
        fn prop_add_percentage_matches_definition(lhs in -1e6f64..1e6, rhs in -1e3f64..1e3) {
            let expected = lhs + lhs * rhs / 100.0;
            prop_assert_eq!(Operator::Add.apply_percentage(lhs, rhs), expected);
        }

        #[test]
        fn prop_multiply_percentage_ignores_lhs_scaling(lhs in -1e6f64..1e6, rhs in -1e3f64..1e3) {
            prop_assert_eq!(Operator::Multiply.apply_percentage(lhs, rhs), lhs * (rhs / 100.0));
        }
    }
}
