use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use super::types::NameTemplate;

/// Longest accepted port file line, newline excluded
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// Card directory below the user's home directory
pub const USER_CARDS_SUBDIR: &str = ".config/jack/cards";

/// System-wide card directory
pub const SYSTEM_CARDS_DIR: &str = "/etc/jack/cards";

/// Where and how port names are looked up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LookupConfig {
    /// Home directory for the per-user files. `None` leaves an empty prefix.
    pub home_dir: Option<PathBuf>,

    /// Directory for the system-wide files
    pub system_dir: PathBuf,

    /// Lines longer than this abort reading of the file
    pub max_line_len: usize,

    pub capture_template: NameTemplate,
    pub playback_template: NameTemplate,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            home_dir: None,
            system_dir: PathBuf::from(SYSTEM_CARDS_DIR),
            max_line_len: DEFAULT_MAX_LINE_LEN,
            capture_template: NameTemplate::capture(),
            playback_template: NameTemplate::playback(),
        }
    }
}

impl LookupConfig {
    /// Default configuration with the current user's home directory
    pub fn from_env() -> Self {
        Self {
            home_dir: dirs::home_dir(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .context(format!("Failed to read lookup config from {:?}", path))?;

        let config: LookupConfig = serde_json::from_str(&json)
            .context("Failed to parse lookup config JSON")?;

        Ok(config)
    }

    /// Per-user card directory
    pub fn user_dir(&self) -> PathBuf {
        match &self.home_dir {
            Some(home) => home.join(USER_CARDS_SUBDIR),
            // No home: same as joining onto an empty prefix
            None => Path::new("/").join(USER_CARDS_SUBDIR),
        }
    }
}
