use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("A selection list needs at least one option.")]
    EmptyOptions,

    #[error("All option values must be unique, found duplicate value `{}`", .0)]
    DuplicateOptionValue(String),

    #[error("Could not switch terminal mode: {}", .0)]
    TerminalMode(std::io::Error),

    #[error("Error reading terminal input: {}", .0)]
    InputRead(std::io::Error),

    #[error("Error writing terminal output: {}", .0)]
    Output(std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Invalid preset name: name may not be empty")]
    EmptyPresetName,

    #[error("A preset named `{}` already exists", .0)]
    NonUniquePresetName(String),

    #[error("Cannot save preset: no preset ID is left after the highest stored one")]
    PresetIdExhausted,

    #[error("No preset found with ID {}", .0)]
    PresetNotFound(u64),

    #[error("Invalid {} connection URL `{}`: expected one of {}", .role, .url, .expected)]
    InvalidConnectionUrl {
        role: String,
        url: String,
        expected: String,
    },
}

impl Error {
    pub fn yaml_error(
        action: &str,
        file_description: &str,
        path: &str,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action: action.to_string(),
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }
}
