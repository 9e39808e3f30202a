//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::config::Theme;

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Digits and the entry line
    pub foreground: Color,
    /// Borders, function keys and the expression line
    pub muted: Color,
    /// Operators and highlighted keys
    pub accent: Color,
}

impl Palette {
    /// Colours for `theme`
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::Gray,
                accent: Color::Yellow,
            },
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Screen areas: display, keypad, help line
#[must_use]
pub fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Expression + entry
            Constraint::Min(7),    // Keypad
            Constraint::Length(1), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// The keypad's area within a screen of `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area)[1]
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    palette: Palette,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self {
            app,
            palette: Palette::for_theme(app.theme()),
        }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();
        let expression = Line::from(Span::styled(
            display.expression_line.unwrap_or_default(),
            Style::default().fg(self.palette.muted),
        ));
        let entry = Line::from(Span::styled(
            display.entry_line,
            Style::default()
                .fg(self.palette.foreground)
                .add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(vec![expression, entry])
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(format!(" {} ", self.app.theme().indicator()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.muted)),
            )
            .style(Style::default().bg(self.palette.background))
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            HELP_LINE,
            Style::default().fg(self.palette.muted),
        ))
        .style(Style::default().bg(self.palette.background))
        .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [display, keypad, help] = layout(area);
        self.render_display(display, buf);
        KeypadWidget::new(self.app.keypad(), self.palette).render(keypad, buf);
        self.render_help(help, buf);
    }
}

/// Keyboard shortcuts shown under the keypad
pub const HELP_LINE: &str = "Enter = · Esc AC · n ± · t theme · q quit";
