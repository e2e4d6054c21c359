use std::fs;
use std::path::{Path, PathBuf};

use super::core::SrcmirrorConfig;
use super::CONFIG_FILE_NAME;
use crate::core::{Error, Result};

/// Directories searched above the source root
const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<SrcmirrorConfig> {
    toml::from_str::<SrcmirrorConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Try one candidate file. Anything other than a clean load means `None`.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SrcmirrorConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // A missing file is the common case
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` directories
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

/// Find the nearest config file at or above `start`, or use defaults
pub fn load_config(start: &Path) -> SrcmirrorConfig {
    let start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No {} found within {} parent directories. Using defaults.",
                CONFIG_FILE_NAME,
                MAX_TRAVERSAL_DEPTH
            );
            SrcmirrorConfig::default()
        })
}

/// Load an explicitly named config file. Unlike discovery, failures are errors.
pub fn load_config_file(path: &Path) -> Result<SrcmirrorConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io(path, e))?;
    parse_config(&contents)
}
