//! Catalog read API - routes GET requests to the storage facade.
//!
//! Routes (all relative to the `api` path segment):
//! - `categories`, `categories/{id}`, `categories/{id}/products`
//! - `products` (optionally `?categoryId=`), `products/{id}`

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing, shared_storage};
use crate::errors::StoreResult;
use crate::storage::Storage;

pub use self::function_handler as handler;

/// Lambda handler for the catalog API entrypoint.
///
/// # Errors
///
/// Never fails at the runtime level; storage failures become 500 responses.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(route(shared_storage(), &event.payload).await)
}

/// Resolves one request against `storage` and builds the response.
pub async fn route(storage: &dyn Storage, payload: &Value) -> Value {
    let method = parsing::request_method(payload);
    let Some(path) = parsing::request_path(payload) else {
        error!("Request missing path");
        return helpers::err_response(400, "Missing path");
    };
    info!(method, path, "Catalog API request");

    if !method.eq_ignore_ascii_case("GET") {
        warn!(method, "Rejected non-GET request");
        return helpers::err_response(405, "Method not allowed");
    }

    let Some(segments) = parsing::api_segments(path) else {
        return helpers::err_response(404, "Not found");
    };
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match segments.as_slice() {
        ["categories"] => respond(storage.get_all_categories().await),
        ["categories", id] => respond_found(storage.get_category_by_id(id).await, "Category", id),
        ["categories", id, "products"] => respond(storage.get_products_by_category(id).await),
        ["products"] => match parsing::query_param(payload, "categoryId") {
            Some(category_id) => respond(storage.get_products_by_category(category_id).await),
            None => respond(storage.get_all_products().await),
        },
        ["products", id] => respond_found(storage.get_product_by_id(id).await, "Product", id),
        _ => helpers::err_response(404, "Not found"),
    }
}

fn respond<T: Serialize>(result: StoreResult<T>) -> Value {
    match result {
        Ok(data) => helpers::ok_json(&data),
        Err(e) => {
            error!("Catalog query failed: {}", e);
            helpers::err_response(500, &e.to_string())
        }
    }
}

fn respond_found<T: Serialize>(result: StoreResult<Option<T>>, kind: &str, id: &str) -> Value {
    match result {
        Ok(Some(data)) => helpers::ok_json(&data),
        Ok(None) => helpers::err_response(404, &format!("{kind} not found: {id}")),
        Err(e) => respond::<T>(Err(e)),
    }
}
