use crate::clients::deepseek::DeepSeekClient;
use crate::config::ChatConfig;
use crate::error::AppError;
use crate::models::chat::ChatResponse;
use crate::models::language::Language;
use crate::models::messages::user_message;
use crate::models::prompt::{max_tokens, system_prompt};

/// Run one relay cycle for an already-validated message. Nothing past this
/// point escapes as an HTTP failure: configuration and upstream errors come
/// back as a localized reply with the error marker set, so the front-end can
/// render them as an ordinary message bubble.
pub async fn create_reply(cfg: &ChatConfig, message: &str) -> ChatResponse {
    let language = Language::detect(message);
    tracing::info!(?language, message_len = message.len(), "language detected");

    let client = match DeepSeekClient::new(cfg) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("deepseek credential not configured");
            return error_reply(language, &err);
        }
    };

    match client
        .complete(system_prompt(language), message, max_tokens(language))
        .await
    {
        Ok(completion) => ChatResponse::success(
            completion.reply,
            language,
            completion.usage,
            completion.model,
        ),
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "chat relay failed");
            error_reply(language, &err)
        }
    }
}

fn error_reply(language: Language, err: &AppError) -> ChatResponse {
    ChatResponse::failure(user_message(language, err), language, err.kind())
}
