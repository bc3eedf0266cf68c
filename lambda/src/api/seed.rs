use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

use super::{helpers, shared_storage};
use crate::seed::seed_database;
use crate::storage::Storage;

pub use self::function_handler as handler;

pub const SEED_SUCCESS_MESSAGE: &str = "Database seeded successfully!";
pub const SEED_FAILURE_MESSAGE: &str = "Failed to seed database";

/// Lambda handler for the seed entrypoint. The event payload is ignored.
#[tracing::instrument(level = "info", skip(_event), fields(request_id = %Uuid::new_v4()))]
pub async fn function_handler(_event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(run_seed(shared_storage()).await)
}

/// Seeds `storage` and reports the outcome as a 200 or 500 response.
pub async fn run_seed(storage: &dyn Storage) -> Value {
    info!("Starting database seeding...");

    match seed_database(storage).await {
        Ok(report) => {
            info!(?report, "Seeding finished");
            let body = json!({ "message": SEED_SUCCESS_MESSAGE, "success": true });
            helpers::json_response(200, &body)
        }
        Err(e) => {
            error!("Seeding error: {}", e);
            helpers::json_response(
                500,
                &json!({
                    "message": SEED_FAILURE_MESSAGE,
                    "error": e.to_string(),
                    "success": false
                }),
            )
        }
    }
}
