//! dbshift Core Library
//!
//! This crate provides the core functionality for dbshift, a terminal tool
//! that picks the source and target databases for a data transfer. Its center
//! is a single-select terminal widget that runs in raw mode, recognizes arrow
//! keys from raw input bytes and redraws itself in place.
//!
//! # Key Features
//!
//! - **Selection Widget**: Arrow-key navigation, Enter to confirm, Ctrl+C to cancel
//! - **Injectable Terminal**: Raw mode, input frames and output go through a trait
//! - **Connection Presets**: Named source/target URL pairs persisted as YAML
//! - **Endpoint Validation**: Scheme checks for source and target connection URLs
//!
//! # Examples
//!
//! Letting the user pick one of two options:
//!
//! ```no_run
//! use dbshift_core::select::{self, OptionSet, Outcome, SelectOption};
//!
//! let options = OptionSet::build(vec![
//!     SelectOption::new(1, "staging"),
//!     SelectOption::new(2, "production"),
//! ])?;
//!
//! match select::select(&options)? {
//!     Outcome::Selected(option) => println!("Picked {}", option.label),
//!     Outcome::Cancelled => println!("Nothing picked"),
//! }
//! # Ok::<(), dbshift_core::error::Error>(())
//! ```

pub mod config;
pub mod endpoints;
pub mod error;
pub mod presets;
pub mod select;
