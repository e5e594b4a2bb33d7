use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "rattendance";
const CONFIG_FILE: &str = "rattendance.conf";
const DATA_FILE: &str = "attendance_data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Defaults to `<data stem>.journal.jsonl` next to the data file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_file: Option<String>,
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join(DATA_FILE)
        .to_string_lossy()
        .to_string()
}
fn default_scan_delay_ms() -> u64 {
    2000
}
fn default_recent_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            journal_file: None,
            scan_delay_ms: default_scan_delay_ms(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{APP_DIR}"))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = self.to_yaml()?;
        fs::write(Self::config_file(), yaml).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Point the data file somewhere else; the journal follows it.
    pub fn override_data_file(&mut self, path: &str) {
        self.data_file = expand_tilde(path).to_string_lossy().to_string();
        self.journal_file = None;
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn journal_path(&self) -> PathBuf {
        match &self.journal_file {
            Some(j) => expand_tilde(j),
            None => journal_beside(&self.data_path()),
        }
    }
}

fn journal_beside(data: &Path) -> PathBuf {
    let stem = data
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "attendance".to_string());
    data.with_file_name(format!("{stem}.journal.jsonl"))
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
