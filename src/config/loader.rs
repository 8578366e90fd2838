use std::fs;
use std::path::{Path, PathBuf};

use super::core::ProjectConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".complexity.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<ProjectConfig, toml::de::Error> {
    toml::from_str::<ProjectConfig>(contents)
}

/// Try loading config from a specific path.
///
/// A missing or unreadable file yields `Ok(None)`; a file that exists but does
/// not parse is an error.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Result<Option<ProjectConfig>> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return Ok(None);
        }
    };

    let config = parse_config(&contents).map_err(|e| {
        Error::configuration(
            format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e),
            config_path,
        )
    })?;
    log::debug!("Loaded config from {}", config_path.display());
    Ok(Some(config))
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the nearest config file at or above `start`, or defaults if none.
pub fn load_config_from(start: &Path) -> Result<ProjectConfig> {
    for dir in directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH) {
        if let Some(config) = try_load_config_from_path(&dir.join(CONFIG_FILE_NAME))? {
            return Ok(config);
        }
    }

    log::debug!(
        "No config found after checking {} directories. Using default config.",
        MAX_TRAVERSAL_DEPTH
    );
    Ok(ProjectConfig::default())
}

/// Load config starting from the current directory.
pub fn load_config() -> Result<ProjectConfig> {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(ProjectConfig::default())
        }
    }
}
