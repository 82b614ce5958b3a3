//! Path management for Spendbook
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/spendbook` on Linux,
//!    `~/Library/Application Support/spendbook` on macOS,
//!    `%APPDATA%\spendbook` on Windows)

use std::path::PathBuf;

use crate::error::SpendbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDBOOK_DATA_DIR";

/// Manages all paths used by Spendbook
#[derive(Debug, Clone)]
pub struct SpendbookPaths {
    /// Base directory for all Spendbook data
    base_dir: PathBuf,
}

impl SpendbookPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SpendbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SpendbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the durable key-value store
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir().join("storage.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SpendbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendbookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SpendbookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Spendbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendbookError> {
    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| SpendbookError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("spendbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = SpendbookPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let paths = SpendbookPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
        assert_eq!(
            paths.storage_file(),
            temp_dir.path().join("data").join("storage.json")
        );
    }
}
