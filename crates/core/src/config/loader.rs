//! Settings file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Settings wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings were read from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load settings from an explicit path, or from the first standard
    /// location that exists, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error; a missing file in a
    /// standard location is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Candidate settings files, in lookup order
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(".repofetch.toml"),
        PathBuf::from("repofetch.toml"),
    ];

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("repofetch").join("config.toml"));
    }

    candidates
}

/// Find a settings file in standard locations
fn find_config_file() -> Option<PathBuf> {
    candidate_paths().into_iter().find(|p| p.is_file())
}

/// Load and parse a TOML settings file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let context = format!("Loading settings from {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(context.clone())?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(context)
        .with_suggestion("Check the file against the [client] and [output] sections")
}
