// src/config/io.rs
use std::fs;
use std::path::Path;

use log::debug;

use super::types::CheckToml;
use crate::error::{CheckError, Result};

pub const CONFIG_FILE: &str = "collicheck.toml";

/// Reads a config file; a missing file yields the defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(path: &Path) -> Result<CheckToml> {
    if !path.exists() {
        debug!("no config at {}; using defaults", path.display());
        return Ok(CheckToml::default());
    }
    let content = fs::read_to_string(path).map_err(|source| CheckError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content)
}

/// Parses config content.
///
/// # Errors
/// Returns error on invalid TOML or unknown phase names.
pub fn parse_toml(content: &str) -> Result<CheckToml> {
    Ok(toml::from_str(content)?)
}

/// Writes a config file.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(config: &CheckToml, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| CheckError::Io { source: std::io::Error::other(e), path: path.to_path_buf() })?;
    fs::write(path, content).map_err(|source| CheckError::Io { source, path: path.to_path_buf() })
}
