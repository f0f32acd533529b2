//! dbshift CLI Library
//!
//! This crate provides the command-line interface for dbshift. It picks the
//! source and target databases for a transfer, either from saved connection
//! presets shown in an interactive list or from URLs typed at a prompt.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`connection_choice`]: Turning presets into a selection list and back
//! - [`prompts`]: Line-based prompts for URLs and preset names
//!
//! # Examples
//!
//! ```bash
//! # Pick a saved connection, or enter a new one
//! dbshift
//!
//! # Skip the menu entirely
//! dbshift --source mongodb://localhost --target postgres://localhost/app
//!
//! # Use another presets file
//! dbshift --presets-path ./presets.yml
//! ```

pub mod cli_args;
pub mod connection_choice;
pub mod prompts;
