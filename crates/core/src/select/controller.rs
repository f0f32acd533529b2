//! The blocking selection loop.

use log::debug;

use super::input::{classify, Action};
use super::state::SelectionState;
use super::terminal::{RawModeGuard, StdTerminal, Terminal};
use super::types::{OptionSet, Outcome};
use super::ui::{render, render_initial};
use crate::error::{Error, Result};

/// Runs a selection session on the given terminal.
///
/// Blocks until the user confirms with Enter or cancels with Ctrl+C. Raw
/// mode is entered first and restored exactly once before returning, on
/// every exit path.
///
/// # Errors
///
/// Returns [`Error::TerminalMode`] if raw mode cannot be entered, and
/// [`Error::InputRead`] or [`Error::Output`] if the terminal fails mid-session.
/// Neither is retried.
pub fn run<V, T>(options: &OptionSet<V>, terminal: &mut T) -> Result<Outcome<V>>
where
    V: Clone,
    T: Terminal + ?Sized,
{
    let mut terminal = RawModeGuard::acquire(terminal)?;
    let mut state = SelectionState::new(options);

    draw(&mut *terminal, &state, true)?;

    loop {
        let frame = terminal.read_frame()?;
        let action = classify(&frame);
        debug!("Input frame {frame:02x?} classified as {action:?}");

        match action {
            Action::CtrlC => return Ok(Outcome::Cancelled),
            Action::Enter => return Ok(Outcome::Selected(state.selected().clone())),
            Action::ArrowUp | Action::ArrowDown | Action::None => {
                if state.apply(action) {
                    debug!("Cursor moved to {}", state.cursor_index());
                    draw(&mut *terminal, &state, false)?;
                }
            }
        }
    }
}

/// Runs a selection session on the process terminal.
///
/// # Errors
///
/// See [`run`].
pub fn select<V: Clone>(options: &OptionSet<V>) -> Result<Outcome<V>> {
    run(options, &mut StdTerminal::new())
}

fn draw<V, T: Terminal + ?Sized>(
    terminal: &mut T,
    state: &SelectionState<'_, V>,
    initial: bool,
) -> Result<()> {
    let mut buffer = Vec::new();
    let rendered = if initial {
        render_initial(state, &mut buffer)
    } else {
        render(state, &mut buffer)
    };
    rendered.map_err(Error::Output)?;

    terminal.write_all(&buffer)
}
