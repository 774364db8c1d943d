//! Storage backend configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::database::DatabaseConfig;
use super::error::ValidationError;

/// Which ToolStore implementation to run
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON document on local disk
    #[default]
    File,
    /// PostgreSQL `tools` table
    Postgres,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Active backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON document used by the `file` backend
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Connection settings used by the `postgres` backend
    pub database: Option<DatabaseConfig>,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.backend {
            StorageBackend::File => {
                if self.data_file.as_os_str().is_empty() {
                    return Err(ValidationError::EmptyDataFile);
                }
                Ok(())
            }
            StorageBackend::Postgres => self
                .database
                .as_ref()
                .ok_or(ValidationError::MissingRequired("STORAGE__DATABASE__URL"))?
                .validate(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_file: default_data_file(),
            database: None,
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/tools.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults_to_file_backend() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.data_file, PathBuf::from("data/tools.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_data_file_is_rejected() {
        let config = StorageConfig {
            data_file: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDataFile));
    }

    #[test]
    fn test_postgres_backend_requires_database() {
        let config = StorageConfig {
            backend: StorageBackend::Postgres,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_postgres_backend_validates_database() {
        let config = StorageConfig {
            backend: StorageBackend::Postgres,
            database: Some(DatabaseConfig {
                url: "postgresql://localhost/tools".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
