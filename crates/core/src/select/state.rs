//! Cursor state of a selection session.

use super::input::Action;
use super::types::{OptionSet, SelectOption};

/// Current cursor position over an [`OptionSet`].
///
/// The cursor always points at an existing option. It starts on the first
/// one and moves by one step per arrow key without wrapping around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState<'a, V = i64> {
    options: &'a OptionSet<V>,
    cursor_index: usize,
}

impl<'a, V> SelectionState<'a, V> {
    #[must_use]
    pub fn new(options: &'a OptionSet<V>) -> Self {
        Self {
            options,
            cursor_index: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> &'a OptionSet<V> {
        self.options
    }

    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    /// The option under the cursor.
    #[must_use]
    pub fn selected(&self) -> &'a SelectOption<V> {
        &self.options.as_slice()[self.cursor_index]
    }

    /// Applies a navigation action and returns whether the cursor moved.
    ///
    /// Only a move requires a redraw. Enter and Ctrl+C end the session
    /// elsewhere and leave the state untouched here.
    pub fn apply(&mut self, action: Action) -> bool {
        let target = match action {
            Action::ArrowUp => self.cursor_index.checked_sub(1),
            Action::ArrowDown => self.cursor_index.checked_add(1),
            Action::None | Action::Enter | Action::CtrlC => None,
        };

        match target {
            Some(index) if self.is_valid_index(index) => {
                self.cursor_index = index;
                true
            }
            _ => false,
        }
    }

    fn is_valid_index(&self, index: usize) -> bool {
        index < self.options.len()
    }
}
