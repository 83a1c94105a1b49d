use std::time::Instant;

use vercel_runtime::{Body, Response, StatusCode};

use crate::http::cors::add_cors;
use crate::models::language::Language;

/// Build a JSON response carrying the standard header set: charset,
/// `Content-Language`, no-store caching, `X-Response-Time`, and CORS.
pub fn json_response<T: serde::Serialize>(
    status: StatusCode,
    language: Language,
    started: Instant,
    value: &T,
) -> anyhow::Result<Response<Body>> {
    let resp = Response::builder()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .header("Content-Language", language.content_language())
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header(
            "X-Response-Time",
            format!("{}ms", started.elapsed().as_millis()),
        )
        .body(serde_json::to_string(value)?.into())?;
    Ok(add_cors(resp))
}
