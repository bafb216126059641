//! RAII guard for safe terminal lifecycle management.
//!
//! Creating the guard switches the terminal into raw mode on the alternate
//! screen; dropping it restores the original state, whether the program
//! exits normally or unwinds through a panic. The panic hook restores the
//! terminal first so the panic message lands on a usable screen.
use std::io::{Result as IoResult, stdout};
use std::panic::{set_hook, take_hook};

use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use log::error;
use ratatui::Terminal;
use ratatui::backend::{Backend as RatatuiBackend, CrosstermBackend};

/// RAII wrapper for terminal state.
///
/// Holding an instance guarantees the terminal is restored when it drops.
pub struct TerminalGuard;

impl TerminalGuard
{
    /// Puts the terminal into TUI mode.
    ///
    /// # Returns
    ///
    /// The guard whose drop restores the terminal.
    ///
    /// # Errors
    ///
    /// On failure to enter raw mode or switch screens.
    pub fn new() -> IoResult<Self>
    {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        // Terminal will be borked on failure, at least inform the user
        if let Err(err) = disable_raw_mode()
        {
            error!("Failed to disable raw mode: {err}");
        }

        if let Err(err) = stdout().execute(LeaveAlternateScreen)
        {
            error!("Failed to leave alternate screen: {err}");
        }
    }
}

/// Creates the terminal backed by stdout.
///
/// Mode switching is handled by [`TerminalGuard`]; this only builds the
/// ratatui terminal on top of it.
///
/// # Errors
///
/// Returns an error if the backend cannot be initialized.
pub fn init_tui()
-> IoResult<Terminal<impl RatatuiBackend<Error: Send + Sync + 'static>>>
{
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Installs a panic hook that restores the terminal before reporting.
pub fn init_panic_hook()
{
    let original_hook = take_hook();
    set_hook(Box::new(move |panic_info| {
        // Restore terminal to a normal state without panicking again
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);

        error!("Application panicked: {panic_info}");

        original_hook(panic_info);
    }));
}
