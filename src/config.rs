//! Persistent user settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::yaml::Error;

/// Settings read from `~/.config/yamlkey/config.toml`.
///
/// Every field is optional in the file; absent fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Spaces per indentation level when inserting structure.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Indent new levels with tabs instead of spaces.
    #[serde(default)]
    pub use_tabs: bool,
    /// Default log level when no -v flag is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_indent_width() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            indent_width: default_indent_width(),
            use_tabs: false,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Path of the config file, `None` when no home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("yamlkey").join("config.toml"))
    }

    /// Load settings from the default location. A missing file or
    /// missing home directory yields the defaults; a malformed file is
    /// an error.
    pub fn load() -> Result<Self, Error> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Settings::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Base(format!("bad config {}: {}", path.display(), e)))
    }

    /// One level of indentation as text.
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}
