//! Lazily opened, process-wide document store connection.
//!
//! The first caller of `ensure_connected` opens the connection; concurrent
//! callers wait on the same attempt. A failed attempt leaves the manager
//! disconnected, so the next call starts over.
//!
//! The connection counts as open once the server answers `ping`. Index
//! creation runs after that and only logs on failure, so a role without
//! `createIndex` can still read the catalog.

use std::sync::Arc;

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};
use once_cell::sync::Lazy;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::entity::Entity;
use crate::core::config::AppConfig;
use crate::core::models::{Category, Product};
use crate::errors::{StoreError, StoreResult};

/// Database used when neither `MONGODB_DB` nor the URI names one.
pub const DEFAULT_DATABASE: &str = "test";

type ConfigLoader = Box<dyn Fn() -> StoreResult<AppConfig> + Send + Sync>;

static GLOBAL: Lazy<Arc<ConnectionManager>> = Lazy::new(|| Arc::new(ConnectionManager::from_env()));

pub struct ConnectionManager {
    loader: ConfigLoader,
    database: OnceCell<Database>,
}

impl ConnectionManager {
    /// Manager that reads `MONGODB_URI` on first use.
    pub fn from_env() -> Self {
        Self::with_loader(AppConfig::from_env)
    }

    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> StoreResult<AppConfig> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            database: OnceCell::new(),
        }
    }

    /// The manager shared by every function handler in this process.
    pub fn global() -> Arc<ConnectionManager> {
        Arc::clone(&GLOBAL)
    }

    pub fn is_connected(&self) -> bool {
        self.database.initialized()
    }

    /// Returns the open database, connecting first if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Configuration` when no connection string is
    /// configured, and `StoreError::Connection` when the server cannot be
    /// reached or the handshake fails.
    pub async fn ensure_connected(&self) -> StoreResult<&Database> {
        self.database
            .get_or_try_init(|| async {
                let config = (self.loader)().inspect_err(|e| {
                    error!("MongoDB connection error: {}", e);
                })?;
                open(&config).await.inspect_err(|e| {
                    error!("MongoDB connection error: {}", e);
                })
            })
            .await
    }
}

async fn open(config: &AppConfig) -> StoreResult<Database> {
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))?;

    let database = match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::Connection(format!("ping: {e}")))?;

    if let Err(e) = ensure_indexes(&database).await {
        warn!(database = %database.name(), "Skipping index creation: {}", e);
    }

    info!(database = %database.name(), "MongoDB connected successfully");
    Ok(database)
}

/// Unique application identifiers per collection, plus the category lookup
/// used by `list_by_category`.
async fn ensure_indexes(database: &Database) -> StoreResult<()> {
    for collection in [Category::COLLECTION, Product::COLLECTION] {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        database
            .collection::<mongodb::bson::Document>(collection)
            .create_index(index)
            .await?;
        debug!(collection, "Ensured unique id index");
    }

    let by_category = IndexModel::builder()
        .keys(doc! { "categoryId": 1 })
        .build();
    database
        .collection::<mongodb::bson::Document>(Product::COLLECTION)
        .create_index(by_category)
        .await?;

    Ok(())
}
