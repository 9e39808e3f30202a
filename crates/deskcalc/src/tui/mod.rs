//! Terminal front-end for the calculator
//!
//! A thin host: key presses and mouse clicks become [`InputEvent`]s for the
//! engine, and the engine's two display lines are drawn above a keypad.
//!
//! [`InputEvent`]: crate::core::InputEvent

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use terminal::run;
pub use ui::{keypad_area, layout, render, CalculatorUI, Palette};
