use thiserror::Error;

/// Configuration-layer errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(String),

    #[error("INI error: {0}")]
    Ini(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Could not find home directory")]
    NoHomeDir,
}

/// Application-level errors for the CLI. Core domain errors only reach the
/// CLI wrapped in `EsiError::Core`, so there is no direct variant for them.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("ESI error: {0}")]
    Esi(#[from] lpscan_esi::EsiError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
