//! Console configuration, loaded from TOML
//!
//! Every field has a default, so an empty or missing file yields a working
//! SQLite-backed console with the `admin`/`admin` account.
//!
//! ```toml
//! [storage]
//! backend = "sqlite"        # sqlite | json | memory
//! path = "gymadmin.db"
//! hydration = "fallback_to_seed"
//!
//! [logging]
//! profile = "production"
//! filter = "gymadmin_core=debug"
//!
//! [admin]
//! username = "admin"
//! password = "admin"
//! display_name = "Administrador"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::auth::AdminAccount;
use crate::errors::{GymError, Result};
use crate::logging_facility::Profile;
use crate::ops::HydrationPolicy;

/// Which `KvStorage` implementation backs the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
    /// Nothing survives the process; useful for demos
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "json" => Ok(StorageBackend::Json),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: PathBuf,
    pub hydration: HydrationPolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: PathBuf::from("gymadmin.db"),
            hydration: HydrationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub profile: Profile,
    /// Filter directive; `RUST_LOG` still wins when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GymConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub admin: AdminAccount,
}

impl GymConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// `GymError::Config` on malformed TOML or unknown enum values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GymError::Config {
            message: format!("failed to parse TOML config: {}", e),
        })
    }

    /// Load from a file that must exist
    ///
    /// # Errors
    ///
    /// `GymError::Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GymError::Config {
            message: format!("failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if it exists, otherwise return the defaults
    ///
    /// # Errors
    ///
    /// See [`GymConfig::load`].
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// # Errors
    ///
    /// `GymError::Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GymError::Config {
            message: format!("failed to serialize config: {}", e),
        })
    }
}
