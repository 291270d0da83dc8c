// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem helpers for loading configuration documents.
//!
//! Reading is a single attempt: the whole file is read into memory or a
//! `ReadError` is returned.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration document (10MB).
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// File name used when loading from the default location.
pub const DEFAULT_FILE_NAME: &str = "config.yaml";

fn read_error(
    path: &Path,
    message: impl Into<String>,
    source: Option<std::io::Error>,
) -> ConfigError {
    ConfigError::ReadError {
        path: path.display().to_string(),
        message: message.into(),
        source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
    }
}

/// Reads a whole document into memory.
///
/// Fails with `ReadError` if the path does not exist, is not a regular file, is
/// unreadable, or is larger than [`MAX_DOCUMENT_SIZE`].
///
/// # Examples
///
/// ```rust,no_run
/// use dots::adapters::read_document;
///
/// let bytes = read_document("/etc/myapp/config.yaml").unwrap();
/// ```
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();

    let metadata = fs::metadata(path)
        .map_err(|e| read_error(path, "Invalid or inaccessible path", Some(e)))?;

    if !metadata.is_file() {
        return Err(read_error(path, "Not a regular file", None));
    }

    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(read_error(
            path,
            format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_DOCUMENT_SIZE
            ),
            None,
        ));
    }

    fs::read(path).map_err(|e| read_error(path, "Failed to read configuration file", Some(e)))
}

/// Returns the OS-appropriate path of `filename` in the application's config directory.
///
/// # Arguments
///
/// * `app_name` - The application name (e.g., "myapp")
/// * `qualifier` - The organization/qualifier (e.g., "com.example")
/// * `filename` - The file name inside the config directory
///
/// # Examples
///
/// ```rust,no_run
/// use dots::adapters::default_config_path;
///
/// let path = default_config_path("myapp", "com.example", "config.yaml").unwrap();
/// ```
pub fn default_config_path(app_name: &str, qualifier: &str, filename: &str) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::ReadError {
            path: filename.to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    Ok(proj_dirs.config_dir().join(filename))
}
