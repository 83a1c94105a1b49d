use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::error::{AppError, Result};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Token accounting as reported by the API, passed through to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// One model reply plus the metadata worth forwarding.
#[derive(Debug)]
pub struct Completion {
    pub reply: String,
    pub usage: Option<Usage>,
    pub model: Option<String>,
}

pub struct DeepSeekClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl DeepSeekClient {
    /// Fails with `Configuration` when the credential is absent or a
    /// placeholder, so no request is ever sent with a known-bad key.
    pub fn new(cfg: &ChatConfig) -> Result<Self> {
        let api_key = cfg.api_key().ok_or(AppError::Configuration)?.to_string();
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            timeout: cfg.timeout,
        })
    }

    /// One completion call, bounded by the configured timeout. Expiry cancels
    /// the in-flight request and maps to `Timeout`; other transport failures
    /// map to `Network`.
    pub async fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<Completion> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature: 0.7,
            stream: false,
        };

        let started = Instant::now();
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "deepseek responded"
        );

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %detail, "deepseek error");
            return Err(AppError::UpstreamHttp {
                status: status.as_u16(),
                detail,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|_| AppError::UpstreamFormat)?;

        let reply = completion
            .choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AppError::UpstreamFormat)?
            .to_string();

        Ok(Completion {
            reply,
            usage: completion.usage,
            model: completion.model,
        })
    }
}
