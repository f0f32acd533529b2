//! Drawing of the selection list.
//!
//! The list is redrawn in place: the cursor is moved back up over the
//! previous drawing and every row is cleared and written again. This works
//! because the number of rows never changes during a session.

use std::io::{self, Write};

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use super::state::SelectionState;

/// Moves the cursor home and clears the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

const SELECTED_MARK: char = '>';
const UNSELECTED_MARK: char = ' ';

/// Clears the whole screen.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Print(CLEAR_SCREEN))
}

/// Draws the list for the first time, below the current cursor position.
pub fn render_initial<V>(state: &SelectionState<'_, V>, out: &mut impl Write) -> io::Result<()> {
    write_rows(state, out)
}

/// Redraws the list over its previous drawing.
pub fn render<V>(state: &SelectionState<'_, V>, out: &mut impl Write) -> io::Result<()> {
    let rows = u16::try_from(state.options().len()).unwrap_or(u16::MAX);
    queue!(out, MoveUp(rows))?;
    write_rows(state, out)
}

fn write_rows<V>(state: &SelectionState<'_, V>, out: &mut impl Write) -> io::Result<()> {
    for (index, option) in state.options().iter().enumerate() {
        let mark = if index == state.cursor_index() {
            SELECTED_MARK
        } else {
            UNSELECTED_MARK
        };

        queue!(
            out,
            Clear(ClearType::CurrentLine),
            Print(format!("\r{mark}{:>2}. {}\n", index + 1, option.label))
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::input::Action;
    use crate::select::types::{OptionSet, SelectOption};

    fn render_to_string<V>(state: &SelectionState<'_, V>) -> String {
        let mut buffer = Vec::new();
        render(state, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn create_two_options() -> OptionSet {
        OptionSet::build(vec![
            SelectOption::new(1, "test1"),
            SelectOption::new(2, "test2"),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_snapshot() {
        let options = create_two_options();
        let state = SelectionState::new(&options);

        assert_eq!(
            render_to_string(&state),
            "\x1b[2A\x1b[2K\r> 1. test1\n\x1b[2K\r  2. test2\n"
        );
    }

    #[test]
    fn test_render_moves_marker() {
        let options = create_two_options();
        let mut state = SelectionState::new(&options);
        state.apply(Action::ArrowDown);

        assert_eq!(
            render_to_string(&state),
            "\x1b[2A\x1b[2K\r  1. test1\n\x1b[2K\r> 2. test2\n"
        );
    }

    #[test]
    fn test_render_initial_skips_cursor_up() {
        let options = create_two_options();
        let state = SelectionState::new(&options);
        let mut buffer = Vec::new();
        render_initial(&state, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "\x1b[2K\r> 1. test1\n\x1b[2K\r  2. test2\n"
        );
    }

    #[test]
    fn test_render_two_digit_positions() {
        let options = OptionSet::build(
            (1..=10)
                .map(|i| SelectOption::new(i, format!("option {i}")))
                .collect(),
        )
        .unwrap();
        let mut state = SelectionState::new(&options);
        for _ in 0..9 {
            state.apply(Action::ArrowDown);
        }

        let rendered = render_to_string(&state);
        assert!(rendered.starts_with("\x1b[10A"));
        assert!(rendered.contains("\x1b[2K\r  9. option 9\n"));
        assert!(rendered.ends_with("\x1b[2K\r>10. option 10\n"));
    }

    #[test]
    fn test_clear_screen() {
        let mut buffer = Vec::new();
        clear_screen(&mut buffer).unwrap();
        assert_eq!(buffer, b"\x1b[H\x1b[2J");
    }
}
