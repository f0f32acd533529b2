//! Choosing the connection to use.
//!
//! Saved presets are offered in the selection list together with an entry
//! for typing in a new connection. The list values are tagged so that the
//! "new connection" entry can never collide with a preset ID.

use std::io::{BufRead, Write};

use dbshift_core::endpoints::{Endpoints, Role};
use dbshift_core::error::{Error, Result};
use dbshift_core::presets::{Preset, PresetStore};
use dbshift_core::select::{OptionSet, SelectOption};
use log::info;

use crate::prompts::{prompt_url_from, read_line_from};

/// Label of the list entry for entering a new connection.
pub const CREATE_NEW_LABEL: &str = "Create new connection";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetChoice {
    Existing(u64),
    CreateNew,
}

/// One entry per preset, in stored order, followed by the create-new entry.
///
/// # Errors
///
/// Returns [`Error::DuplicateOptionValue`] if two presets share an ID.
pub fn preset_options(presets: &[Preset]) -> Result<OptionSet<PresetChoice>> {
    let options = presets
        .iter()
        .map(|preset| SelectOption::new(PresetChoice::Existing(preset.id), preset.to_string()))
        .chain(std::iter::once(SelectOption::new(
            PresetChoice::CreateNew,
            CREATE_NEW_LABEL,
        )))
        .collect();

    OptionSet::build(options)
}

/// Looks up a preset picked from the list.
///
/// # Errors
///
/// Returns [`Error::PresetNotFound`] for an unknown ID, or an invalid URL error
/// if the stored URLs do not validate.
pub fn preset_endpoints(store: &PresetStore, id: u64) -> Result<Endpoints> {
    let preset = store.find(id).ok_or(Error::PresetNotFound(id))?;
    Endpoints::from_preset(preset)
}

/// Defaults and switches for entering a new connection.
#[derive(Debug, Default, Clone)]
pub struct NewConnectionOptions<'a> {
    pub default_source: Option<&'a str>,
    pub default_target: Option<&'a str>,
    pub skip_save: bool,
}

/// Prompts for a new source and target, then offers to save them as a preset.
///
/// An empty preset name skips saving. A taken name is reported and asked again.
///
/// # Errors
///
/// Returns an error if prompting fails or the presets file cannot be written.
pub fn enter_new_connection_from(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    store: &mut PresetStore,
    options: &NewConnectionOptions<'_>,
) -> Result<Endpoints> {
    let source_url = prompt_url_from(reader, writer, Role::Source, options.default_source)?;
    let target_url = prompt_url_from(reader, writer, Role::Target, options.default_target)?;

    if !options.skip_save {
        loop {
            let name = read_line_from(
                reader,
                writer,
                "Save this connection as (leave empty to skip): ",
            )?;
            if name.is_empty() {
                info!("Connection not saved");
                break;
            }

            match store.save(&name, &source_url, &target_url) {
                Ok(preset) => {
                    writeln!(writer, "Saved connection `{}`", preset.name)?;
                    break;
                }
                Err(e @ Error::NonUniquePresetName(_)) => writeln!(writer, "{e}")?,
                Err(e) => return Err(e),
            }
        }
    }

    Ok(Endpoints {
        source_url,
        target_url,
    })
}
