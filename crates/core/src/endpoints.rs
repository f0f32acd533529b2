//! Source and target connection URLs.
//!
//! Data is read from a MongoDB source and written to a PostgreSQL target.
//! URLs are checked for the right scheme before they are used or saved.

use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::presets::Preset;

const SOURCE_SCHEMES: &[&str] = &["mongodb://", "mongodb+srv://"];
const TARGET_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Source,
    Target,
}

impl Role {
    #[must_use]
    pub fn schemes(self) -> &'static [&'static str] {
        match self {
            Role::Source => SOURCE_SCHEMES,
            Role::Target => TARGET_SCHEMES,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Source => f.write_str("source"),
            Role::Target => f.write_str("target"),
        }
    }
}

/// Checks that `url` uses a scheme accepted for `role` and returns it trimmed.
///
/// # Errors
///
/// Returns [`Error::InvalidConnectionUrl`] for a blank URL or an unexpected scheme.
pub fn validate_url(role: Role, url: &str) -> Result<String> {
    let url = url.trim();
    let has_host = role
        .schemes()
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme));

    if has_host {
        Ok(url.to_string())
    } else {
        Err(Error::InvalidConnectionUrl {
            role: role.to_string(),
            url: url.to_string(),
            expected: role.schemes().join(", "),
        })
    }
}

/// A validated source/target pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub source_url: String,
    pub target_url: String,
}

impl Endpoints {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConnectionUrl`] if either URL is invalid.
    pub fn new(source_url: &str, target_url: &str) -> Result<Self> {
        Ok(Self {
            source_url: validate_url(Role::Source, source_url)?,
            target_url: validate_url(Role::Target, target_url)?,
        })
    }

    /// Presets may have been edited by hand, so their URLs are checked again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConnectionUrl`] if either stored URL is invalid.
    pub fn from_preset(preset: &Preset) -> Result<Self> {
        Self::new(&preset.source_url, &preset.target_url)
    }
}
