//! Access to the terminal device.
//!
//! The selection loop never touches stdin, stdout or the terminal mode
//! directly. It goes through [`Terminal`] so that a scripted terminal can
//! stand in for the real one.

use std::io::{self, Read, Stdin, Stdout, Write};
use std::ops::{Deref, DerefMut};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, warn};

use super::input::{RawFrame, FRAME_SIZE};
use crate::error::{Error, Result};

/// Terminal capability used by a selection session.
pub trait Terminal {
    /// Switches to raw mode, remembering the mode it replaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalMode`] if the mode cannot be changed.
    fn enter_raw_mode(&mut self) -> Result<()>;

    /// Puts back the mode that was active before [`Terminal::enter_raw_mode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalMode`] if the mode cannot be changed.
    fn restore_mode(&mut self) -> Result<()>;

    /// Blocks until input arrives and returns one frame of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputRead`] if reading fails or input has ended.
    fn read_frame(&mut self) -> Result<RawFrame>;

    /// Writes and flushes output bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if writing fails.
    fn write_all(&mut self, bytes: &[u8]) -> Result<()>;
}

/// The process terminal: stdin, stdout and the OS terminal mode.
pub struct StdTerminal {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn enter_raw_mode(&mut self) -> Result<()> {
        enable_raw_mode().map_err(Error::TerminalMode)
    }

    fn restore_mode(&mut self) -> Result<()> {
        disable_raw_mode().map_err(Error::TerminalMode)
    }

    fn read_frame(&mut self) -> Result<RawFrame> {
        // Fresh frame on every read, a short read never sees old bytes
        let mut frame = [0u8; FRAME_SIZE];
        let read = self.stdin.lock().read(&mut frame).map_err(Error::InputRead)?;

        if read == 0 {
            return Err(Error::InputRead(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }

        Ok(frame)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stdout = self.stdout.lock();
        stdout.write_all(bytes).map_err(Error::Output)?;
        stdout.flush().map_err(Error::Output)
    }
}

/// Holds a terminal in raw mode and restores it when dropped.
///
/// The restore happens exactly once, on every path that drops the guard,
/// including early returns through `?`.
pub struct RawModeGuard<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> RawModeGuard<'a, T> {
    /// Enters raw mode. No guard (and no restore) exists if this fails.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Terminal::enter_raw_mode`].
    pub fn acquire(terminal: &'a mut T) -> Result<Self> {
        terminal.enter_raw_mode()?;
        debug!("Entered raw terminal mode");
        Ok(Self { terminal })
    }
}

impl<T: Terminal + ?Sized> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> DerefMut for RawModeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        match self.terminal.restore_mode() {
            Ok(()) => debug!("Restored terminal mode"),
            Err(e) => warn!("Could not restore terminal mode: {e}"),
        }
    }
}
