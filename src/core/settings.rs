//! User settings loaded from a JSON file, with overridable defaults.

use crate::core::error::{CvsScoutError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which client distribution the command façade drives.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientFlavor {
    /// The classic command-line cvs client.
    #[default]
    Cvs,
    /// A CVSNT installation; captured output comes from the cvs executable
    /// shipped alongside the configured binary.
    CvsNt,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Client binary to invoke. A bare name is resolved through PATH.
    pub binary_path: PathBuf,
    pub flavor: ClientFlavor,
    /// Seconds a classified status stays fresh in the cache.
    pub cache_ttl_secs: u64,
    /// Include per-file tag lists in `log` output.
    pub log_show_tags: bool,
    /// Produce unified diffs unless overridden on the command line.
    pub diff_unified: bool,
    /// Hosts embedding the library use this to decide whether to offer
    /// CVS actions in their menus at all.
    pub enable_menus: bool,
    /// Force debug logging regardless of the environment.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from("cvs"),
            flavor: ClientFlavor::Cvs,
            cache_ttl_secs: 5,
            log_show_tags: true,
            diff_unified: false,
            enable_menus: true,
            debug: false,
        }
    }
}

impl Settings {
    /// Load settings from the per-user configuration file, falling back to
    /// defaults when the file or the configuration directory does not exist.
    pub fn load_or_default() -> Result<Self> {
        match Self::config_file() {
            Ok(file) if file.exists() => Self::load_from(&file),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific JSON file. Missing keys take their
    /// default values; unreadable or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| CvsScoutError::settings_read(path, source))?;
        serde_json::from_str(&content).map_err(|source| CvsScoutError::settings_parse(path, source))
    }

    /// Write settings as pretty-printed JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| CvsScoutError::settings_write(path, source))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| CvsScoutError::settings_write(path, source))
    }

    /// Location of the per-user configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(config_directory()?.join("config.json"))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    }
    .ok_or(CvsScoutError::ConfigDirectoryNotFound)?;

    Ok(base.join("cvs-scout"))
}
