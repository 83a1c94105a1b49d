use std::time::Duration;

pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEEPSEEK_MODEL: &str = "deepseek-chat";

const DEFAULT_TIMEOUT_SECS: u64 = 55;

// Values that deployment docs use as samples; sending them upstream would
// only produce a confusing 401.
const PLACEHOLDER_KEYS: &[&str] = &["required", "your-deepseek-api-key"];

/// Configuration for one handler invocation. Read from the environment once
/// at the function edge and passed down by value, so tests can construct it
/// directly without touching the environment.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("DEEPSEEK_API_KEY").ok(),
            endpoint: DEEPSEEK_API_URL.to_string(),
            model: DEEPSEEK_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// The usable credential, if any. Missing, blank, and placeholder keys
    /// are the same condition: not configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !PLACEHOLDER_KEYS.contains(key))
    }
}
