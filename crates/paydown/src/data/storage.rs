//! File storage for the data directory
//!
//! Directory structure:
//! ~/.paydown/
//!   config.yaml          # Preferences (strategy, extra cash, week start)
//!   ledger.yaml          # Debts and payment history
//!   paydown.log          # Rotating log file

use std::fs;
use std::path::{Path, PathBuf};

use crate::util::io::atomic_write;

use super::ledger_data::{ConfigData, LedgerData};

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Everything loaded from the data directory in one pass
pub struct LoadResult {
    pub ledger: LedgerData,
    pub config: ConfigData,
}

/// Manages the data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.paydown/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".paydown")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn ledger_path(&self) -> PathBuf {
        self.root.join("ledger.yaml")
    }

    /// Whether a ledger file has been created yet
    pub fn has_ledger(&self) -> bool {
        self.ledger_path().exists()
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load the ledger file; a missing file is an empty ledger
    pub fn load_ledger(&self) -> Result<LedgerData, StorageError> {
        let path = self.ledger_path();
        if !path.exists() {
            return Ok(LedgerData::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read ledger: {}", e)))?;

        LedgerData::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse ledger: {}", e)))
    }

    /// Save the ledger file
    pub fn save_ledger(&self, ledger: &LedgerData) -> Result<(), StorageError> {
        self.init()?;

        let yaml = ledger
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize ledger: {}", e)))?;

        atomic_write(&self.ledger_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write ledger: {}", e)))
    }

    /// Load the config file; a missing file yields default preferences
    pub fn load_config(&self) -> Result<ConfigData, StorageError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(ConfigData::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        ConfigData::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save the config file
    pub fn save_config(&self, config: &ConfigData) -> Result<(), StorageError> {
        self.init()?;

        let yaml = config
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        atomic_write(&self.config_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Load ledger and config together
    pub fn load(&self) -> Result<LoadResult, StorageError> {
        Ok(LoadResult {
            ledger: self.load_ledger()?,
            config: self.load_config()?,
        })
    }

    /// Get the root path of the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}
