//! On-screen keypad
//!
//! Clickable with the mouse and highlighted when the matching key is typed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::ui::Palette;
use crate::core::{Digit, InputEvent, Operator, OperatorSymbols};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The text on the button
    pub label: String,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The press this button sends
    pub event: InputEvent,
}

impl KeypadButton {
    /// Creates a button sending `event`
    #[must_use]
    pub fn new(label: impl Into<String>, event: InputEvent) -> Self {
        Self {
            label: label.into(),
            pressed: false,
            event,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: Digit) -> Self {
        Self::new(d.as_str(), InputEvent::Digit(d))
    }

    /// Creates an operator button labelled from `symbols`
    #[must_use]
    pub fn operator<S: OperatorSymbols + ?Sized>(op: Operator, symbols: &S) -> Self {
        Self::new(symbols.symbol(op), InputEvent::Operator(op))
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ AC ] [ ± ] [ % ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ − ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [ 00 ] [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (5 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Keypad {
    /// Creates the standard keypad with operator labels from `symbols`
    #[must_use]
    pub fn new<S: OperatorSymbols + ?Sized>(symbols: &S) -> Self {
        let [d1, d2, d3, d4, d5, d6, d7, d8, d9] = Digit::ALL;
        let buttons = vec![
            KeypadButton::new("AC", InputEvent::AllClear),
            KeypadButton::new("±", InputEvent::ToggleSign),
            KeypadButton::new(symbols.percent(), InputEvent::Percentage),
            KeypadButton::operator(Operator::Divide, symbols),
            KeypadButton::digit(d7),
            KeypadButton::digit(d8),
            KeypadButton::digit(d9),
            KeypadButton::operator(Operator::Multiply, symbols),
            KeypadButton::digit(d4),
            KeypadButton::digit(d5),
            KeypadButton::digit(d6),
            KeypadButton::operator(Operator::Subtract, symbols),
            KeypadButton::digit(d1),
            KeypadButton::digit(d2),
            KeypadButton::digit(d3),
            KeypadButton::operator(Operator::Add, symbols),
            KeypadButton::new("00", InputEvent::DoubleZero),
            KeypadButton::new("0", InputEvent::Zero),
            KeypadButton::new(".", InputEvent::DecimalPoint),
            KeypadButton::new("=", InputEvent::Equals),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button sending `event`
    #[must_use]
    pub fn find_button(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button sending `event`, releasing the others
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(btn) = self
            .find_button(event)
            .and_then(|idx| self.buttons.get_mut(idx))
        {
            btn.set_pressed(true);
        }
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }

    fn button_style(&self, btn: &KeypadButton) -> Style {
        let base = Style::default().bg(self.palette.background);
        if btn.pressed {
            return Style::default()
                .fg(self.palette.background)
                .bg(self.palette.accent)
                .add_modifier(Modifier::BOLD);
        }
        match btn.event {
            InputEvent::Operator(_) | InputEvent::Equals => base.fg(self.palette.accent),
            InputEvent::AllClear | InputEvent::ToggleSign | InputEvent::Percentage => {
                base.fg(self.palette.muted)
            }
            _ => base.fg(self.palette.foreground),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.muted))
            .style(Style::default().bg(self.palette.background))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if btn_width >= label_width {
                let label_x = x + (btn_width - label_width) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, self.button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
