use serde::Serialize;

/// Reply language, derived per request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Language {
    /// A single CJK ideograph is enough to classify the message as Chinese.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c)) {
            Language::Zh
        } else {
            Language::En
        }
    }

    /// Best-effort detection from raw body bytes, for responses produced
    /// before (or instead of) a successful parse.
    pub fn detect_bytes(raw: &[u8]) -> Self {
        Self::detect(&String::from_utf8_lossy(raw))
    }

    /// Value for the `Content-Language` response header.
    pub fn content_language(self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en",
        }
    }
}
