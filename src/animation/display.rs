//! Terminal session for the animation
//!
//! The terminal is acquired for the duration of a closure and released by a
//! scope guard on every exit path: normal return, error, or panic (ratatui's
//! panic hook restores it before the panic message prints).

use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::DefaultTerminal;

/// Run `f` with the terminal in raw mode on the alternate screen
///
/// Raw mode means Ctrl+C arrives as an ordinary key event rather than
/// SIGINT, so the animation cannot be interrupted halfway and leave the
/// terminal in a broken state. Keys pressed during the run are discarded
/// before the terminal is handed back to the shell.
pub fn with_display<T>(f: impl FnOnce(&mut DefaultTerminal) -> io::Result<T>) -> io::Result<T> {
    let mut terminal = scopeguard::guard(ratatui::try_init()?, |_| {
        ratatui::restore();
    });

    terminal.hide_cursor()?;
    terminal.clear()?;

    let result = f(&mut *terminal);
    drain_pending_input()?;
    result
}

/// Discard buffered key presses so they do not leak into the shell
fn drain_pending_input() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}
