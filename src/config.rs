// src/config.rs

use crate::error::{RepositoryError, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured repository location.
pub const REPOSITORY_ENV: &str = "OPENADAS_REPOSITORY";

/// Repository location relative to the home directory.
pub const DEFAULT_REPOSITORY_SUBPATH: &str = ".cherab/openadas/repository";

/// `~/.cherab/openadas/repository`, or the bare relative path if there is no home directory.
pub fn default_repository_path() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(DEFAULT_REPOSITORY_SUBPATH),
        None => PathBuf::from(DEFAULT_REPOSITORY_SUBPATH),
    }
}

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub repository_path: Option<PathBuf>,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl Config {
    /// Loads config from the standard OS location (e.g. ~/.config/openadas-repo/settings.json).
    ///
    /// Never fails: the second value says where the config came from, for logging
    /// once a logger exists.
    pub fn load() -> (Self, String) {
        Self::load_from(&Self::get_path())
    }

    pub fn load_from(path: &Path) -> (Self, String) {
        if path.exists() {
            match File::open(path) {
                Ok(file) => {
                    let reader = BufReader::new(file);
                    match serde_json::from_reader(reader) {
                        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
                        Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
                    }
                }
                Err(e) => (Self::default(), format!("Error opening config: {}", e)),
            }
        } else {
            (
                Self::default(),
                "No config found. Using defaults.".to_string(),
            )
        }
    }

    /// Saves config to the standard OS location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::get_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| RepositoryError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| RepositoryError::io(path, e))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| RepositoryError::json(path, e))
    }

    /// Picks the repository root: explicit override, then `$OPENADAS_REPOSITORY`,
    /// then the configured path, then the default.
    pub fn repository_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Some(p) = std::env::var_os(REPOSITORY_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(p);
        }
        self.repository_path
            .clone()
            .unwrap_or_else(default_repository_path)
    }

    pub fn get_path() -> PathBuf {
        if let Some(proj) = ProjectDirs::from("org", "openadas", "openadas-repo") {
            proj.config_dir().join("settings.json")
        } else {
            PathBuf::from("settings.json")
        }
    }
}
