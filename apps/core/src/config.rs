use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::VisibilitySettings;

pub const DEFAULT_COPY_ACK_WINDOW_MS: u64 = 2_000;
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub config_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
    pub copy_ack_window_ms: u64,
    pub default_visibility: VisibilitySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: stable_app_data_dir().join(CONFIG_FILE_NAME),
            fixture_path: None,
            copy_ack_window_ms: DEFAULT_COPY_ACK_WINDOW_MS,
            default_visibility: VisibilitySettings::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Serialize(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
            Self::Serialize(error) => write!(f, "serialize error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub fn stable_app_data_dir() -> PathBuf {
    std::env::temp_dir().join("quickfind")
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if !(250..=10_000).contains(&cfg.copy_ack_window_ms) {
        return Err("copy_ack_window_ms out of range".into());
    }

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    if cfg
        .fixture_path
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err("fixture_path must not be empty when set".into());
    }

    Ok(())
}

/// Reads the config at `path` (or the default location). A missing file
/// yields defaults bound to that path.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| Config::default().config_path);

    let mut cfg = match std::fs::read_to_string(&config_path) {
        Ok(raw) => parse(&raw)?,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(error) => return Err(ConfigError::Io(error)),
    };
    cfg.config_path = config_path;

    validate(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

pub fn parse(raw: &str) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(raw).map_err(|e| ConfigError::Parse(e.to_string()))
}

pub fn save(cfg: &Config) -> Result<(), ConfigError> {
    validate(cfg).map_err(ConfigError::Invalid)?;
    if let Some(parent) = cfg.config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let encoded = toml::to_string_pretty(cfg).map_err(|e| ConfigError::Serialize(e.to_string()))?;
    std::fs::write(&cfg.config_path, encoded)?;
    Ok(())
}
