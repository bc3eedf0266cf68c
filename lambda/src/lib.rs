//! Storefront - catalog data access and serverless functions for a small
//! e-commerce site.
//!
//! The crate is the backend of a browsable storefront of categories and
//! products:
//! 1. A storage layer with one CRUD repository per entity kind, behind a
//!    single `Storage` facade
//! 2. A catalog API function that serves category and product reads
//! 3. A seed function that loads the initial catalog
//!
//! # Architecture
//!
//! The system uses:
//! - MongoDB as the document store, through the official `mongodb` driver
//! - A lazily opened, process-wide connection (`MONGODB_URI`)
//! - AWS Lambda-compatible function handlers via `lambda_runtime`
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use storefront::core::models::{NewCategory, NewProduct};
//! use storefront::storage::{ConnectionManager, MongoStorage, Storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     storefront::setup_logging();
//!
//!     // Nothing connects until the first operation
//!     let storage = MongoStorage::mongo(ConnectionManager::global());
//!
//!     storage
//!         .create_category(NewCategory::new("cat1", "Sarees", "Traditional sarees"))
//!         .await?;
//!     storage
//!         .create_product(NewProduct::new("p1", "cat1", "Silk Saree", 1200.0))
//!         .await?;
//!
//!     for product in storage.get_products_by_category("cat1").await? {
//!         println!("{} - {}", product.name, product.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod seed;
pub mod storage;

pub use errors::{StoreError, StoreResult};

/// Configure structured logging with JSON format for serverless environments.
///
/// Installs a tracing-subscriber JSON formatter filtered by `RUST_LOG`
/// (default `info`). Calling it again after a subscriber is installed is a
/// no-op, so every function entrypoint can call it.
///
/// # Example
///
/// ```
/// storefront::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
