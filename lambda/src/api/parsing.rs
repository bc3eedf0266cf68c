//! Reads request fields out of function-URL / API Gateway / Netlify events.

use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of the request; events without one are treated as GET.
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
}

pub fn request_path(payload: &Value) -> Option<&str> {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
}

pub fn query_param<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    v_str(payload, &["queryStringParameters", name])
        .filter(|v| !v.is_empty())
}

/// Percent-decoded path segments after the first `api` segment.
///
/// `/api/products/p1` and `/.netlify/functions/api/products/p1` both yield
/// `["products", "p1"]`. Returns `None` when the path has no `api` segment.
pub fn api_segments(path: &str) -> Option<Vec<String>> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    segments.by_ref().find(|s| *s == "api")?;
    Some(
        segments
            .map(|s| {
                urlencoding::decode(s)
                    .map(|d| d.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            })
            .collect(),
    )
}
