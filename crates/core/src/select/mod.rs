//! Interactive single-select list for raw terminals.
//!
//! The widget draws a numbered list of options, moves a `>` marker with the
//! arrow keys and returns the marked option on Enter. Ctrl+C cancels.
//!
//! # Components
//!
//! - [`input`]: classification of raw 3-byte input frames into actions
//! - [`types`]: validated option sets and session outcomes
//! - [`state`]: cursor position and its transitions
//! - [`ui`]: in-place redraw through cursor-addressing escape codes
//! - [`terminal`]: the terminal capability (raw mode, reads, writes) and its guard
//! - [`controller`]: the blocking run loop that ties everything together
//!
//! Input is classified one read at a time. An escape sequence split across two
//! reads is not reassembled: its pieces are classified separately.

pub mod controller;
pub mod input;
pub mod state;
pub mod terminal;
pub mod types;
pub mod ui;

pub use controller::{run, select};
pub use input::{classify, Action, RawFrame};
pub use state::SelectionState;
pub use terminal::{RawModeGuard, StdTerminal, Terminal};
pub use types::{OptionSet, Outcome, SelectOption};
