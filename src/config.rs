use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::PlayerMode;

/// Board dimensions.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: 8,
            height: 8,
        }
    }
}

/// Initial control mode for each side. Dark is the first player.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub dark: PlayerMode,
    pub light: PlayerMode,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            dark: PlayerMode::Manual,
            light: PlayerMode::Manual,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub save_path: PathBuf,
    pub board: BoardConfig,
    pub players: PlayersConfig,
    /// Delay before an automatic player's move is played, in milliseconds.
    pub auto_move_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            save_path: PathBuf::from("reversi.save"),
            board: BoardConfig::default(),
            players: PlayersConfig::default(),
            auto_move_delay_ms: 500,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < 4 || self.board.height < 4 {
            return Err(ConfigError::Validation(
                "board.width and board.height must be >= 4".into(),
            ));
        }
        if self.board.width % 2 != 0 || self.board.height % 2 != 0 {
            return Err(ConfigError::Validation(
                "board.width and board.height must be even".into(),
            ));
        }
        if self.auto_move_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "auto_move_delay_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
