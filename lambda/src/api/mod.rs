//! Function handlers: catalog reads and database seeding

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod seed;

use once_cell::sync::Lazy;

use crate::storage::{ConnectionManager, MongoStorage};

// Re-export the main handler for convenience
pub use handler::handler;

static STORAGE: Lazy<MongoStorage> = Lazy::new(|| MongoStorage::mongo(ConnectionManager::global()));

/// Storage backed by the process-wide connection. Warm invocations reuse it.
pub fn shared_storage() -> &'static MongoStorage {
    &STORAGE
}
