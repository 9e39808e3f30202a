//! Discrete input events, one per calculator button

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult, Operator};

/// A non-zero digit key, 1 through 9
///
/// Zero has its own keys ([`InputEvent::Zero`], [`InputEvent::DoubleZero`])
/// because it follows the leading-zero rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The nine digit keys in order
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit, rejecting anything outside 1..=9
    pub fn new(d: u8) -> CalcResult<Self> {
        Self::try_from(d)
    }

    /// The digit's value
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The digit as typed
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.0 {
            1 => "1",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            _ => "9",
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(d: u8) -> Result<Self, Self::Error> {
        match d {
            1..=9 => Ok(Self(d)),
            _ => Err(CalcError::InvalidDigit(d)),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key that appends digits to the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitKey {
    /// A non-zero digit
    Digit(Digit),
    /// `0`
    Zero,
    /// `00`
    DoubleZero,
}

impl DigitKey {
    /// The text this key appends
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Digit(d) => d.as_str(),
            Self::Zero => "0",
            Self::DoubleZero => "00",
        }
    }

    /// Returns true for the zero keys
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero | Self::DoubleZero)
    }
}

impl From<Digit> for DigitKey {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// A non-zero digit
    Digit(Digit),
    /// The `0` button
    Zero,
    /// The `00` button
    DoubleZero,
    /// The `.` button
    DecimalPoint,
    /// One of the four operator buttons
    Operator(Operator),
    /// The `=` button
    Equals,
    /// The `AC` button
    AllClear,
    /// The `±` button
    ToggleSign,
    /// The `%` button
    Percentage,
}

impl InputEvent {
    /// Creates a digit event, mapping 0 to [`InputEvent::Zero`]
    pub fn digit(d: u8) -> CalcResult<Self> {
        match d {
            0 => Ok(Self::Zero),
            _ => Digit::try_from(d).map(Self::Digit),
        }
    }

    /// Parses a whitespace-separated key sequence such as `"2 0 + 1 0 %"`
    pub fn parse_sequence(input: &str) -> CalcResult<Vec<Self>> {
        input.split_whitespace().map(str::parse).collect()
    }

    /// The digit key behind this event, if it is one
    #[must_use]
    pub const fn digit_key(&self) -> Option<DigitKey> {
        match self {
            Self::Digit(d) => Some(DigitKey::Digit(*d)),
            Self::Zero => Some(DigitKey::Zero),
            Self::DoubleZero => Some(DigitKey::DoubleZero),
            _ => None,
        }
    }
}

impl FromStr for InputEvent {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let event = match token {
            "0" => Self::Zero,
            "00" => Self::DoubleZero,
            "." | "," => Self::DecimalPoint,
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "*" | "x" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "%" => Self::Percentage,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            _ if token.eq_ignore_ascii_case("ac") || token.eq_ignore_ascii_case("c") => {
                Self::AllClear
            }
            _ => {
                let mut chars = token.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d @ 1..=9), None) => Self::Digit(Digit(d as u8)),
                    _ => return Err(CalcError::unknown_key(token)),
                }
            }
        };
        Ok(event)
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Zero => f.write_str("0"),
            Self::DoubleZero => f.write_str("00"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(Operator::Add) => f.write_str("+"),
            Self::Operator(Operator::Subtract) => f.write_str("-"),
            Self::Operator(Operator::Multiply) => f.write_str("*"),
            Self::Operator(Operator::Divide) => f.write_str("/"),
            Self::Equals => f.write_str("="),
            Self::AllClear => f.write_str("AC"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Percentage => f.write_str("%"),
        }
    }
}

/// Key tokens accepted by [`InputEvent::from_str`], with descriptions
pub const KEY_TOKENS: &[(&str, &str)] = &[
    ("1-9", "digit"),
    ("0", "zero"),
    ("00", "double zero"),
    (". ,", "decimal point"),
    ("+", "add"),
    ("- −", "subtract"),
    ("* x ×", "multiply"),
    ("/ ÷", "divide"),
    ("=", "equals"),
    ("%", "percentage"),
    ("+/- ± neg", "toggle sign"),
    ("AC C", "all clear"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> InputEvent {
        InputEvent::digit(d).unwrap()
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(digit(0), InputEvent::Zero);
        assert_eq!(digit(7), InputEvent::Digit(Digit::ALL[6]));
        assert!(matches!(
            InputEvent::digit(10),
            Err(CalcError::InvalidDigit(10))
        ));
    }

    #[test]
    fn test_digit_rejects_out_of_range() {
        for d in [0u8, 10, 42, 255] {
            assert!(matches!(Digit::new(d), Err(CalcError::InvalidDigit(v)) if v == d));
        }
        assert!(matches!(
            InputEvent::digit(42),
            Err(CalcError::InvalidDigit(42))
        ));
    }

    #[test]
    fn test_digit_all_in_order() {
        let values: Vec<u8> = Digit::ALL.iter().map(|d| d.get()).collect();
        assert_eq!(values, (1..=9).collect::<Vec<u8>>());
        for d in Digit::ALL {
            assert_eq!(d.as_str(), d.get().to_string());
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_digit() {
        let result = serde_json::from_str::<InputEvent>(r#"{"event":"digit","value":42}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<InputEvent>(r#"{"event":"digit","value":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_digit_serde_shape() {
        let json = serde_json::to_string(&digit(7)).unwrap();
        assert_eq!(json, r#"{"event":"digit","value":7}"#);
        let event: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, digit(7));
    }

    #[test]
    fn test_parse_digits() {
        for d in 1..=9u8 {
            let event: InputEvent = d.to_string().parse().unwrap();
            assert_eq!(event, digit(d));
        }
        assert_eq!("0".parse::<InputEvent>().unwrap(), InputEvent::Zero);
        assert_eq!("00".parse::<InputEvent>().unwrap(), InputEvent::DoubleZero);
    }

    #[test]
    fn test_parse_operators() {
        assert_eq!(
            "+".parse::<InputEvent>().unwrap(),
            InputEvent::Operator(Operator::Add)
        );
        assert_eq!(
            "−".parse::<InputEvent>().unwrap(),
            InputEvent::Operator(Operator::Subtract)
        );
        assert_eq!(
            "x".parse::<InputEvent>().unwrap(),
            InputEvent::Operator(Operator::Multiply)
        );
        assert_eq!(
            "÷".parse::<InputEvent>().unwrap(),
            InputEvent::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!("=".parse::<InputEvent>().unwrap(), InputEvent::Equals);
        assert_eq!("%".parse::<InputEvent>().unwrap(), InputEvent::Percentage);
        assert_eq!("ac".parse::<InputEvent>().unwrap(), InputEvent::AllClear);
        assert_eq!("C".parse::<InputEvent>().unwrap(), InputEvent::AllClear);
        assert_eq!("+/-".parse::<InputEvent>().unwrap(), InputEvent::ToggleSign);
        assert_eq!(",".parse::<InputEvent>().unwrap(), InputEvent::DecimalPoint);
    }

    #[test]
    fn test_parse_unknown() {
        for token in ["12", "sqrt", "(", "", "٣"] {
            assert!(
                matches!(token.parse::<InputEvent>(), Err(CalcError::UnknownKey { .. })),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_sequence() {
        let events = InputEvent::parse_sequence("2 0 + 1 0 %").unwrap();
        assert_eq!(
            events,
            vec![
                digit(2),
                InputEvent::Zero,
                InputEvent::Operator(Operator::Add),
                digit(1),
                InputEvent::Zero,
                InputEvent::Percentage,
            ]
        );
    }

    #[test]
    fn test_parse_sequence_reports_bad_token() {
        let err = InputEvent::parse_sequence("1 + ? 2").unwrap_err();
        assert_eq!(err.to_string(), "Unknown key: ?");
    }

    #[test]
    fn test_display_parses_back() {
        let events = [
            digit(5),
            InputEvent::Zero,
            InputEvent::DoubleZero,
            InputEvent::DecimalPoint,
            InputEvent::Operator(Operator::Subtract),
            InputEvent::Equals,
            InputEvent::AllClear,
            InputEvent::ToggleSign,
            InputEvent::Percentage,
        ];
        for event in events {
            assert_eq!(event.to_string().parse::<InputEvent>().unwrap(), event);
        }
    }

    #[test]
    fn test_digit_key() {
        assert_eq!(digit(4).digit_key().map(DigitKey::as_str), Some("4"));
        assert_eq!(InputEvent::DoubleZero.digit_key(), Some(DigitKey::DoubleZero));
        assert_eq!(InputEvent::Equals.digit_key(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&InputEvent::Operator(Operator::Add)).unwrap();
        assert_eq!(json, r#"{"event":"operator","value":"add"}"#);
        let event: InputEvent = serde_json::from_str(r#"{"event":"equals"}"#).unwrap();
        assert_eq!(event, InputEvent::Equals);
    }
}
