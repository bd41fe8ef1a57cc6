use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the course catalog CLI.
///
/// Controls how data files are parsed and which file the non-interactive
/// commands read when `--file` is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The field delimiter used by course data files.
    delimiter: char,

    /// The data file to load when none is given on the command line.
    data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            data_file: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or if the
    /// file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The field delimiter for course data files.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Sets the field delimiter.
    pub const fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    /// The default data file, if one is configured.
    #[must_use]
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }
}

const fn default_delimiter() -> char {
    ','
}

/// The serialized versions of the configuration.
/// This allows the on-disk format to evolve without breaking the domain type.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        data_file: Option<PathBuf>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                data_file,
            } => Self {
                delimiter,
                data_file,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            data_file: config.data_file,
        }
    }
}
