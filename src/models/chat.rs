use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::language::Language;
use crate::clients::deepseek::Usage;

/// Inbound body. `message` is the only field consumed.
#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.message.trim().is_empty() {
            Err("message is empty".into())
        } else {
            Ok(())
        }
    }
}

/// The normalized body every chat response carries, success or not. When the
/// upstream call failed, `error` holds the classified kind and `reply` the
/// localized explanation, so the front-end renders it as a normal bubble.
#[derive(Serialize, Debug)]
pub struct ChatResponse {
    pub reply: String,
    pub language: Language,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatResponse {
    pub fn success(
        reply: String,
        language: Language,
        usage: Option<Usage>,
        model: Option<String>,
    ) -> Self {
        Self {
            reply,
            language,
            timestamp: now(),
            error: None,
            usage,
            model,
        }
    }

    pub fn failure(reply: String, language: Language, kind: &'static str) -> Self {
        Self {
            reply,
            language,
            timestamp: now(),
            error: Some(kind),
            usage: None,
            model: None,
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
