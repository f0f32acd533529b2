//! Configuration path utilities for dbshift.
//!
//! Resolves where saved connection presets live and expands shell
//! shortcuts like `~` in those paths.

/// Default path for the saved connection presets file
pub const DEFAULT_PRESETS_PATH: &str = "~/.dbshift/presets.yml";

/// Resolves the presets file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// presets path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use dbshift_core::config::get_presets_path;
///
/// let custom_path = get_presets_path(&Some("/tmp/presets.yml".to_string()));
/// assert_eq!(custom_path, "/tmp/presets.yml");
/// ```
pub fn get_presets_path(presets_path_arg: &Option<String>) -> String {
    let presets_path = match presets_path_arg {
        Some(presets_path) => presets_path,
        None => DEFAULT_PRESETS_PATH,
    };

    shellexpand::tilde(presets_path).to_string()
}
