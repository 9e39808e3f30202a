//! Calculator engine: the desk-calculator state machine
//!
//! One pending binary operation at a time, folded left to right with no
//! precedence. The pending operation is a tagged state so the arithmetic
//! branch can only run once an operator and a second operand both exist.
//!
//! The engine is single-threaded and not reentrant. Hosts with more than one
//! thread go through [`crate::driver::SharedCalculator`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::entry::EntryBuffer;
use super::event::{DigitKey, InputEvent};
use super::format::format_display_value;
use super::operations::{Operator, OperatorSymbols};

/// Where the engine is within a binary operation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    /// Typing goes to the left operand
    Idle { operand1: f64 },
    /// An operator was chosen; typing goes to the right operand
    AwaitingOperand2 {
        operand1: f64,
        operator: Operator,
        operand2: Option<f64>,
    },
}

impl Default for Pending {
    fn default() -> Self {
        Self::Idle { operand1: 0.0 }
    }
}

/// The last finished computation, rendered on the expression line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// Left operand as it stood before the computation
    pub operand1: f64,
    /// Operator applied
    pub operator: Operator,
    /// Right operand as typed
    pub operand2: f64,
    /// Whether the right operand was taken as a percentage
    pub percentage: bool,
    /// Computed value
    pub result: f64,
}

impl Completion {
    /// Renders `"<operand1> <symbol> <operand2>[%]"`
    #[must_use]
    pub fn expression<S: OperatorSymbols + ?Sized>(&self, symbols: &S) -> String {
        let lhs = format_display_value(Some(self.operand1)).unwrap_or_default();
        let rhs = format_display_value(Some(self.operand2)).unwrap_or_default();
        let percent = if self.percentage { symbols.percent() } else { "" };
        format!("{lhs} {} {rhs}{percent}", symbols.symbol(self.operator))
    }
}

/// The two display lines produced after every press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Main line: the number being typed, or the latest result
    pub entry_line: String,
    /// Secondary line: the completed expression, if one is showing
    pub expression_line: Option<String>,
}

/// Desk-calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    entry: EntryBuffer,
    pending: Pending,
    entry_line: String,
    last: Option<Completion>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine in its cleared state
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: EntryBuffer::new(),
            pending: Pending::default(),
            entry_line: EntryBuffer::new().to_string(),
            last: None,
        }
    }

    // ===== Accessors =====

    /// The text currently being typed
    #[must_use]
    pub fn entry_buffer(&self) -> &str {
        self.entry.as_str()
    }

    /// The left operand
    #[must_use]
    pub fn operand1(&self) -> f64 {
        match self.pending {
            Pending::Idle { operand1 } | Pending::AwaitingOperand2 { operand1, .. } => operand1,
        }
    }

    /// The right operand, once one has been typed
    #[must_use]
    pub fn operand2(&self) -> Option<f64> {
        match self.pending {
            Pending::Idle { .. } => None,
            Pending::AwaitingOperand2 { operand2, .. } => operand2,
        }
    }

    /// The operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        match self.pending {
            Pending::Idle { .. } => None,
            Pending::AwaitingOperand2 { operator, .. } => Some(operator),
        }
    }

    /// The last finished computation while it is still on screen
    #[must_use]
    pub fn last_completion(&self) -> Option<&Completion> {
        self.last.as_ref()
    }

    /// The value of the last finished computation while it is on screen
    #[must_use]
    pub fn last_result(&self) -> Option<f64> {
        self.last.map(|c| c.result)
    }

    /// The main display line
    #[must_use]
    pub fn entry_line(&self) -> &str {
        &self.entry_line
    }

    /// The expression line rendered with `symbols`
    #[must_use]
    pub fn expression_line<S: OperatorSymbols + ?Sized>(&self, symbols: &S) -> Option<String> {
        self.last.map(|c| c.expression(symbols))
    }

    /// Both display lines rendered with `symbols`
    #[must_use]
    pub fn display<S: OperatorSymbols + ?Sized>(&self, symbols: &S) -> DisplayState {
        DisplayState {
            entry_line: self.entry_line.clone(),
            expression_line: self.expression_line(symbols),
        }
    }

    // ===== Actions =====

    /// Routes an input event to its action
    pub fn dispatch(&mut self, event: InputEvent) {
        trace!(%event, "dispatch");
        match event {
            InputEvent::Digit(d) => self.input_digit(d),
            InputEvent::Zero => self.input_digit(DigitKey::Zero),
            InputEvent::DoubleZero => self.input_digit(DigitKey::DoubleZero),
            InputEvent::DecimalPoint => self.input_decimal_point(),
            InputEvent::Operator(op) => self.input_operator(op),
            InputEvent::Equals => self.equals(),
            InputEvent::AllClear => self.all_clear(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::Percentage => self.percentage(),
        }
    }

    /// Appends a digit key (`1`-`9`, `0` or `00`) to the entry
    ///
    /// Zeros typed onto a lone zero leave the text alone but still commit
    /// the zero as the active operand, so `5 ÷ 0 =` divides by zero.
    pub fn input_digit(&mut self, key: impl Into<DigitKey>) {
        let key = key.into();
        if !self.entry.push_digits(key) {
            trace!(digits = key.as_str(), "zero kept as lone zero");
        }
        self.entry_changed();
    }

    /// Appends a decimal point unless the entry already has one
    pub fn input_decimal_point(&mut self) {
        if self.entry.push_decimal_point() {
            self.entry_changed();
        }
    }

    /// Flips the sign of the entry
    pub fn toggle_sign(&mut self) {
        self.entry.toggle_sign();
        self.entry_changed();
    }

    /// Completes any pending computation, then makes `op` pending
    pub fn input_operator(&mut self, op: Operator) {
        self.equals();
        let operand1 = self.operand1();
        self.pending = Pending::AwaitingOperand2 {
            operand1,
            operator: op,
            operand2: None,
        };
        trace!(operator = ?op, operand1, "operator pending");
    }

    /// Completes the pending computation if a right operand exists
    ///
    /// Without one this only clears the entry buffer; the display is left
    /// as it was. Pressing `=` again after a completion is therefore a
    /// no-op.
    pub fn equals(&mut self) {
        if let Pending::AwaitingOperand2 {
            operand1,
            operator,
            operand2: Some(operand2),
        } = self.pending
        {
            let result = operator.apply(operand1, operand2);
            self.complete(Completion {
                operand1,
                operator,
                operand2,
                percentage: false,
                result,
            });
        } else {
            self.entry.reset();
        }
    }

    /// Applies the percent key
    ///
    /// Without a right operand the left operand is divided by 100. With one,
    /// the pending operation completes with the right operand read as a
    /// percentage (see [`Operator::apply_percentage`]).
    pub fn percentage(&mut self) {
        match self.pending {
            Pending::AwaitingOperand2 {
                operand1,
                operator,
                operand2: Some(operand2),
            } => {
                let result = operator.apply_percentage(operand1, operand2);
                self.complete(Completion {
                    operand1,
                    operator,
                    operand2,
                    percentage: true,
                    result,
                });
            }
            Pending::Idle { ref mut operand1 }
            | Pending::AwaitingOperand2 {
                ref mut operand1,
                operand2: None,
                ..
            } => {
                *operand1 /= 100.0;
                self.entry = EntryBuffer::from_value(*operand1);
                self.show_entry();
            }
        }
    }

    /// Resets every field to its initial value
    pub fn all_clear(&mut self) {
        *self = Self::new();
        trace!("all clear");
    }

    // ===== Internals =====

    // Re-derives the active operand from the buffer and shows the buffer.
    fn entry_changed(&mut self) {
        let value = self.entry.value();
        match &mut self.pending {
            Pending::Idle { operand1 } => *operand1 = value,
            Pending::AwaitingOperand2 { operand2, .. } => *operand2 = Some(value),
        }
        self.show_entry();
    }

    fn show_entry(&mut self) {
        self.last = None;
        self.entry_line.clear();
        self.entry_line.push_str(self.entry.as_str());
    }

    fn complete(&mut self, completion: Completion) {
        debug!(
            operand1 = completion.operand1,
            operator = ?completion.operator,
            operand2 = completion.operand2,
            percentage = completion.percentage,
            result = completion.result,
            "computation complete"
        );
        self.entry.reset();
        self.entry_line = format_display_value(Some(completion.result)).unwrap_or_default();
        self.pending = Pending::Idle {
            operand1: completion.result,
        };
        self.last = Some(completion);
    }
}
