//! Wiring of configured adapters into the application.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::http::ToolHandlers;
use crate::adapters::postgres::PostgresToolStore;
use crate::adapters::storage::{JsonFileToolStore, LocalImageStorage};
use crate::config::{AppConfig, StorageBackend, StorageConfig};
use crate::ports::ToolStore;

/// Failure to bring up a configured adapter.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("postgres backend selected but no database settings were provided")]
    MissingDatabase,

    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Open the tool store selected by configuration.
pub async fn connect_tool_store(
    storage: &StorageConfig,
) -> Result<Arc<dyn ToolStore>, BootstrapError> {
    match storage.backend {
        StorageBackend::File => {
            let store = JsonFileToolStore::open(&storage.data_file).await;
            tracing::info!(path = %storage.data_file.display(), "Using JSON file tool store");
            Ok(Arc::new(store))
        }
        StorageBackend::Postgres => {
            let database = storage
                .database
                .as_ref()
                .ok_or(BootstrapError::MissingDatabase)?;
            let pool = database.pool_options().connect(&database.url).await?;

            if database.run_migrations {
                sqlx::migrate!("./migrations").run(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            tracing::info!(
                max_connections = database.max_connections,
                "Using PostgreSQL tool store"
            );
            Ok(Arc::new(PostgresToolStore::new(pool)))
        }
    }
}

/// Build the HTTP handler set for a loaded configuration.
pub async fn build_tool_handlers(config: &AppConfig) -> Result<ToolHandlers, BootstrapError> {
    let store = connect_tool_store(&config.storage).await?;
    let images = Arc::new(LocalImageStorage::new(&config.server.public_dir));
    Ok(ToolHandlers::from_ports(store, images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::ToolDraft;
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_backend_opens_configured_document() {
        let dir = TempDir::new().unwrap();
        let storage = StorageConfig {
            data_file: dir.path().join("tools.json"),
            ..StorageConfig::default()
        };

        let store = connect_tool_store(&storage).await.unwrap();
        store
            .insert(ToolDraft {
                name: "Hammer".to_string(),
                price: 9.99,
                brand: "Acme".to_string(),
                description: "Steel claw hammer".to_string(),
                img_name: "images/h.png".to_string(),
            })
            .await
            .unwrap();

        assert!(dir.path().join("tools.json").exists());
    }

    #[tokio::test]
    async fn postgres_backend_without_settings_fails() {
        let storage = StorageConfig {
            backend: StorageBackend::Postgres,
            ..StorageConfig::default()
        };

        let result = connect_tool_store(&storage).await;
        assert!(matches!(result, Err(BootstrapError::MissingDatabase)));
    }
}
