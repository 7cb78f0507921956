//! Application-level configuration loading, including game constants and word-list overrides.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "ALIAS_BACK_CONFIG_PATH";
/// Team score required to win a game unless the config overrides it.
const DEFAULT_TARGET_SCORE: u32 = 25;
/// Client-enforced turn duration reported in game-state snapshots.
const DEFAULT_TIME_PER_TURN_SECS: u64 = 60;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    target_score: u32,
    time_per_turn_secs: u64,
    word_lists: Option<WordListsConfig>,
}

/// Optional per-difficulty word-list overrides from the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct WordListsConfig {
    /// Replacement pool for the easy tier.
    #[serde(default)]
    pub easy: Option<Vec<String>>,
    /// Replacement pool for the medium tier.
    #[serde(default)]
    pub medium: Option<Vec<String>>,
    /// Replacement pool for the hard tier.
    #[serde(default)]
    pub hard: Option<Vec<String>>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        target_score = config.target_score,
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Team score a room must reach to win.
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Turn duration in seconds, reported to clients for their countdown.
    pub fn time_per_turn_secs(&self) -> u64 {
        self.time_per_turn_secs
    }

    /// Word-list overrides, when the config file provides any.
    pub fn word_lists(&self) -> Option<&WordListsConfig> {
        self.word_lists.as_ref()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            time_per_turn_secs: DEFAULT_TIME_PER_TURN_SECS,
            word_lists: None,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    target_score: Option<u32>,
    #[serde(default)]
    time_per_turn_secs: Option<u64>,
    #[serde(default)]
    words: Option<WordListsConfig>,
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            target_score: raw.target_score.unwrap_or(DEFAULT_TARGET_SCORE),
            time_per_turn_secs: raw.time_per_turn_secs.unwrap_or(DEFAULT_TIME_PER_TURN_SECS),
            word_lists: raw.words,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
