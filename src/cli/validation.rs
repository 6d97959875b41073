//! CLI argument validation functions
//!
//! Custom value parsers for arguments that clap cannot validate on its own.
//! Destination and message are deliberately not validated here; the
//! notification service owns those rules.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate an origin identifier override is not blank
pub fn validate_origin(origin_str: &str) -> Result<String, String> {
    let origin = origin_str.trim();

    if origin.is_empty() {
        return Err("Origin identifier cannot be empty".to_string());
    }

    if origin.contains(char::is_whitespace) {
        return Err(format!("Origin identifier cannot contain spaces: '{}'", origin_str));
    }

    Ok(origin.to_string())
}
