//! Saved connection presets.
//!
//! A preset is a named pair of source and target connection URLs. Presets
//! are kept in a single YAML file that is rewritten on every save.

use std::fmt::{Display, Formatter};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

const FILE_DESCRIPTION: &str = "presets";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: u64,
    pub name: String,
    pub source_url: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Display for Preset {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} ({} -> {})",
            self.name, self.source_url, self.target_url
        )
    }
}

/// File-backed list of presets.
#[derive(Debug)]
pub struct PresetStore {
    path: String,
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Loads the presets stored at `path`.
    ///
    /// A missing or blank file is an empty store; it is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// contain a YAML list of presets.
    pub fn open(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!("No presets file at `{path}`, starting empty");
            return Ok(Self {
                path: path.to_string(),
                presets: Vec::new(),
            });
        }

        let mut contents = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut contents))
            .map_err(|e| Error::io_error(FILE_DESCRIPTION, path, e))?;

        let presets: Vec<Preset> = if contents.trim().is_empty() {
            Vec::new()
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|e| Error::yaml_error("reading", FILE_DESCRIPTION, path, e))?
        };

        Ok(Self {
            path: path.to_string(),
            presets,
        })
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// All presets, in the order they were saved.
    #[must_use]
    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    #[must_use]
    pub fn find(&self, id: u64) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    /// Adds a preset and writes the store back to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already taken, if no ID is
    /// left after the highest stored one, or if the file cannot be written.
    /// The store and the file are unchanged on error.
    pub fn save(&mut self, name: &str, source_url: &str, target_url: &str) -> Result<Preset> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyPresetName);
        }

        if self.presets.iter().any(|preset| preset.name == name) {
            return Err(Error::NonUniquePresetName(name.to_string()));
        }

        let id = self.next_id()?;
        let now = Utc::now();
        let preset = Preset {
            id,
            name: name.to_string(),
            source_url: source_url.to_string(),
            target_url: target_url.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.presets.push(preset.clone());
        if let Err(e) = self.write() {
            self.presets.pop();
            return Err(e);
        }

        info!("Saved preset `{}` with ID {}", preset.name, preset.id);
        Ok(preset)
    }

    fn next_id(&self) -> Result<u64> {
        match self.presets.iter().map(|preset| preset.id).max() {
            None => Ok(1),
            Some(highest) => highest.checked_add(1).ok_or(Error::PresetIdExhausted),
        }
    }

    /// Writes to a temporary file next to the presets file and renames it
    /// into place, so a failed write never leaves a truncated file behind.
    fn write(&self) -> Result<()> {
        let dir = match Path::new(&self.path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| Error::io_error(FILE_DESCRIPTION, &self.path, e))?;

        let mut temp_file = NamedTempFile::new_in(dir)
            .map_err(|e| Error::io_error(FILE_DESCRIPTION, &self.path, e))?;

        serde_yaml::to_writer(&mut temp_file, &self.presets)
            .map_err(|e| Error::yaml_error("writing", FILE_DESCRIPTION, &self.path, e))?;

        temp_file
            .persist(&self.path)
            .map_err(|e| Error::io_error(FILE_DESCRIPTION, &self.path, e.error))?;

        Ok(())
    }
}
