use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

pub type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run `undo` when `result` is an error, then hand the result back unchanged
fn or_undo<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

/// Raw-mode alternate screen that is handed back on drop, whichever way the
/// game loop exits
pub struct TerminalSession {
    terminal: TuiTerminal,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        or_undo(execute!(stderr, EnterAlternateScreen), || {
            let _ = disable_raw_mode();
        })
        .context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stderr);
        let terminal = or_undo(Terminal::new(backend), || {
            let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })
        .context("Failed to create terminal")?;

        // From here on Drop restores the terminal
        let mut session = Self {
            terminal,
            active: true,
        };
        session
            .terminal
            .hide_cursor()
            .context("Failed to hide cursor")?;
        session.terminal.clear().context("Failed to clear terminal")?;

        Ok(session)
    }

    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }

    /// Give the terminal back, reporting any failure
    pub fn leave(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            error!("Failed to restore terminal: {:#}", e);
        }
    }
}
