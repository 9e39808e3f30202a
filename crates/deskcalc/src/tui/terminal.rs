//! Terminal setup and the event loop

use std::io;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use super::{keypad_area, render, CalculatorApp, InputHandler};
use crate::config::AppConfig;
use crate::core::CalcResult;

/// Runs the interactive calculator until the user quits
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including failures while entering the alternate screen.
pub fn run(config: &AppConfig) -> CalcResult<()> {
    enable_raw_mode()?;
    with_restore(|| enter_and_run(config), restore_terminal)
}

fn enter_and_run(config: &AppConfig) -> CalcResult<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, CalculatorApp::with_config(config))
}

fn restore_terminal() -> CalcResult<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

// Runs `restore` whatever `body` returns. The body's error wins.
fn with_restore<T>(
    body: impl FnOnce() -> CalcResult<T>,
    restore: impl FnOnce() -> CalcResult<()>,
) -> CalcResult<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CalcResult<()> {
    let input_handler = InputHandler::new();
    tracing::info!("terminal calculator started");

    while !app.should_quit() {
        let size = terminal.size()?;
        let screen = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle(input_handler.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.click(keypad_area(screen), column, row),
            _ => {}
        }
    }

    tracing::info!("terminal calculator stopped");
    Ok(())
}
