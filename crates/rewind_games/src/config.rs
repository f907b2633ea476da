//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "REWIND_CONFIG";

/// How history entries are labelled in the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HistoryLabelStyle {
    /// "Restart" for the empty board, "Move N+1" for entry N.
    #[default]
    Descriptive,
    /// "a" for the empty board, "b" for every later entry.
    Letters,
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Labels used in the history list.
    #[serde(default)]
    history_labels: HistoryLabelStyle,

    /// Show "Draw" instead of "Next player" once the board fills up.
    #[serde(default = "default_announce_draw")]
    announce_draw: bool,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_announce_draw() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_labels: HistoryLabelStyle::default(),
            announce_draw: default_announce_draw(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config named by `--config`, else by [`CONFIG_ENV`], else defaults.
    ///
    /// A named file that cannot be read is an error.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match resolve_path(explicit, from_env) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file named, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the history label style.
    pub fn with_history_labels(mut self, style: HistoryLabelStyle) -> Self {
        self.history_labels = style;
        self
    }

    /// Turns draw announcements on or off.
    pub fn with_announce_draw(mut self, announce: bool) -> Self {
        self.announce_draw = announce;
        self
    }
}

/// Picks the config path: the flag wins over the environment.
pub fn resolve_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or(from_env)
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
