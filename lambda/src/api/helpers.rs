//! Response builders shared by the function handlers.
//!
//! Every response uses the serverless shape
//! `{ "statusCode", "headers", "body": "<json string>" }`.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

/// Wraps an already built JSON body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns a 200 OK response with `data` as the body.
#[must_use]
pub fn ok_json<T: Serialize>(data: &T) -> Value {
    match serde_json::to_value(data) {
        Ok(body) => json_response(200, &body),
        Err(e) => {
            error!("Response serialize error: {}", e);
            err_response(500, "Failed to encode response")
        }
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}
