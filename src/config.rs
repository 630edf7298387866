use crate::constants::{DEFAULT_INPUT_CSV, DEFAULT_OUTPUT_JSON};
use crate::error::{ExtractorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Paths for a single extraction run. Defaults mirror the paths the tool has
/// always used; a `config.toml` next to the binary may override them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_csv: PathBuf,
    pub output_json: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from(DEFAULT_INPUT_CSV),
            output_json: PathBuf::from(DEFAULT_OUTPUT_JSON),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, falling back to the
    /// default paths when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        let config_content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ExtractorError::Config(format!(
                    "Failed to read config file '{config_path}': {e}"
                )))
            }
        };

        let config: Config = toml::from_str(&config_content)
            .map_err(|e| ExtractorError::Config(format!("Invalid '{config_path}': {e}")))?;
        Ok(config)
    }
}
