use std::time::Instant;

use serde_json::json;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::config::ChatConfig;
use crate::error::AppError;
use crate::http::cors::add_cors;
use crate::http::response::json_response;
use crate::models::chat::ChatRequest;
use crate::models::language::Language;
use crate::models::messages;
use crate::services::chat;

/// The full request→response cycle. Lives in the library (rather than the
/// function binary) so tests can drive it with constructed requests and an
/// injected config.
pub async fn handle(req: Request, cfg: &ChatConfig) -> Result<Response<Body>, Error> {
    let started = Instant::now();
    tracing::info!(method = %req.method(), "request received");

    // CORS preflight
    if req.method().as_str() == "OPTIONS" {
        return Ok(add_cors(
            Response::builder().status(StatusCode::OK).body(Body::Empty)?,
        ));
    }

    let body_bytes = req.body();
    // Responses produced before a successful parse (405, 400) still get
    // localized text; detection runs best-effort over the raw bytes.
    let fallback_language = Language::detect_bytes(body_bytes);

    if req.method().as_str() != "POST" {
        let mut resp = json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            fallback_language,
            started,
            &json!({
                "error": messages::method_not_allowed(fallback_language),
                "language": fallback_language,
            }),
        )?;
        resp.headers_mut()
            .insert("Allow", "POST, OPTIONS".parse().unwrap());
        return Ok(resp);
    }

    let parsed: Option<ChatRequest> = if body_bytes.is_empty() {
        None
    } else {
        serde_json::from_slice(body_bytes).ok()
    };

    let valid = parsed.filter(|req| req.validate().is_ok());
    let Some(request) = valid else {
        let err = AppError::Validation("message is missing or empty".into());
        return Ok(json_response(
            StatusCode::BAD_REQUEST,
            fallback_language,
            started,
            &json!({
                "error": messages::user_message(fallback_language, &err),
                "language": fallback_language,
            }),
        )?);
    };

    let reply = chat::create_reply(cfg, request.message.trim()).await;
    Ok(json_response(StatusCode::OK, reply.language, started, &reply)?)
}
