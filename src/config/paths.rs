//! Path management for the kitchen manager
//!
//! ## Path Resolution Order
//!
//! 1. `KITCHEN_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config` on Linux,
//!    `~/Library/Application Support` on macOS, `%APPDATA%` on Windows)
//!    joined with `kitchen-cli`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::KitchenError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KITCHEN_CLI_DATA_DIR";

/// Manages all paths used by the kitchen manager
#[derive(Debug, Clone)]
pub struct KitchenPaths {
    /// Base directory for all kitchen data
    base_dir: PathBuf,
}

impl KitchenPaths {
    /// Create a new KitchenPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, KitchenError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KitchenPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the CSV tables
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

    pub fn ingredients_file(&self) -> PathBuf {
        self.data_dir().join("ingredients.csv")
    }

    pub fn recipes_file(&self) -> PathBuf {
        self.data_dir().join("recipes.csv")
    }

    pub fn waste_file(&self) -> PathBuf {
        self.data_dir().join("waste.csv")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.csv")
    }

    /// Get the path to the labeled expiry training table
    pub fn expiry_dataset_file(&self) -> PathBuf {
        self.data_dir().join("expiry_dataset.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), KitchenError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KitchenError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KitchenError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the kitchen has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, KitchenError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| KitchenError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("kitchen-cli"))
}
