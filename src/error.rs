use std::path::PathBuf;

/// Errors raised while decoding the text save format.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("header line must have at least 3 characters, got {0}")]
    TruncatedHeader(usize),

    #[error("unrecognized turn symbol '{0}' in header")]
    BadTurnSymbol(char),

    #[error("unrecognized player mode digit '{0}' in header")]
    BadModeDigit(char),

    #[error("unrecognized cell symbol '{0}'")]
    BadCellSymbol(char),
}

/// Errors that can occur while saving or restoring a game.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to read save file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write save file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed save data: {0}")]
    Format(#[from] FormatError),

    #[error(
        "saved board is {found_width}x{found_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
