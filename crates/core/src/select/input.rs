//! Recognition of keys in raw terminal input.
//!
//! Terminal special keys never exceed three bytes, so input is read in
//! fixed 3-byte frames and each frame is classified on its own.

/// Size of one raw input read.
pub const FRAME_SIZE: usize = 3;

/// One raw read from the input stream. Unused trailing bytes are zero.
pub type RawFrame = [u8; FRAME_SIZE];

const CTRL_C: u8 = 0x03;
const ENTER: u8 = 0x0D;
const ESCAPE: u8 = 0x1B;
const CONTROL_SEQUENCE_START: u8 = 0x5B;
const ARROW_UP: u8 = 0x41;
const ARROW_DOWN: u8 = 0x42;

/// What a single input frame means to the selection list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Anything unrecognized. Ignored.
    None,
    CtrlC,
    Enter,
    ArrowUp,
    ArrowDown,
}

/// Maps a raw frame to exactly one [`Action`].
///
/// Ctrl+C and Enter are decided by the first byte alone. Arrows need the
/// complete `ESC [ A` / `ESC [ B` sequence inside the frame.
#[must_use]
pub fn classify(frame: &RawFrame) -> Action {
    match *frame {
        [CTRL_C, _, _] => Action::CtrlC,
        [ENTER, _, _] => Action::Enter,
        [ESCAPE, CONTROL_SEQUENCE_START, ARROW_UP] => Action::ArrowUp,
        [ESCAPE, CONTROL_SEQUENCE_START, ARROW_DOWN] => Action::ArrowDown,
        _ => Action::None,
    }
}
